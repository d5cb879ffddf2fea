// SPDX-License-Identifier: MPL-2.0
//! The application update loop.
//!
//! Component messages are forwarded to their module's `update` and the
//! returned events are turned into app-level effects here: toasts, the
//! simulated delays, store writes, and the delete confirmation dialog.

use super::{App, Message};
use crate::config::{self, Config};
use crate::data;
use crate::ui::forms::{self, FormKind};
use crate::ui::notifications::Notification;
use crate::ui::overview::{self, ExportKind};
use crate::ui::tables;
use crate::ui::{settings, sidebar};
use chrono::Local;
use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::time::Duration;

/// Simulated latency of the initial dashboard load.
pub const LOAD_DELAY: Duration = Duration::from_secs(1);

/// Simulated latency of a form save.
pub const SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency of an export.
pub const EXPORT_DELAY: Duration = Duration::from_secs(2);

/// Fade-out time between delete confirmation and row removal.
pub const REMOVE_DELAY: Duration = Duration::from_millis(300);

/// Produces `message` after `duration` has elapsed.
pub fn after(duration: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(duration), move |()| message.clone())
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Sidebar(sidebar_message) => {
            match sidebar::update(sidebar_message, &mut app.section) {
                sidebar::Event::None | sidebar::Event::SectionChanged(_) => {}
            }
            Task::none()
        }
        Message::Tables(table_message) => {
            let event = tables::update(table_message, &mut app.tables);
            handle_table_event(app, event)
        }
        Message::Forms(form_message) => {
            let event = forms::update(form_message, &mut app.forms);
            handle_form_event(app, event)
        }
        Message::Settings(settings_message) => {
            let event = settings::update(settings_message, &mut app.settings);
            handle_settings_event(app, event)
        }
        Message::Overview(overview::Message::Export(kind)) => {
            app.notifications.push(Notification::info(kind.start_message()));
            after(EXPORT_DELAY, Message::ExportFinished(kind))
        }
        Message::ExportFinished(kind) => {
            app.notifications
                .push(Notification::success(kind.done_message()));
            Task::none()
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::SearchInputChanged(value) => {
            app.quick_search
                .input_changed(value, std::time::Instant::now());
            Task::none()
        }
        Message::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            app.settings.theme_mode = app.theme_mode;
            app.charts.clear_caches();
            if let Some(warning) = persist_config(app) {
                app.notifications.push(Notification::warning(warning));
            }
            Task::none()
        }
        Message::DataLoaded => {
            app.loading = false;
            app.stats = data::stats(app.tables.users.rows.len());
            app.activity = data::recent_activity();
            Task::none()
        }
        Message::Refresh => {
            if !app.loading {
                app.stats = data::stats(app.tables.users.rows.len());
                app.activity = data::recent_activity();
            }
            Task::none()
        }
        Message::ClockTick => {
            app.now = Local::now();
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.sweep(now);
            app.quick_search.tick(now);
            Task::none()
        }
        Message::DeleteConfirmed {
            kind,
            id,
            confirmed,
        } => {
            if confirmed {
                app.tables.begin_removal(kind, id);
                after(REMOVE_DELAY, Message::RowRemovalDue { kind, id })
            } else {
                Task::none()
            }
        }
        Message::RowRemovalDue { kind, id } => {
            if app.tables.finish_removal(kind, id) {
                app.notifications.push(Notification::success(format!(
                    "{} #{id} deleted successfully",
                    kind.row_noun()
                )));
                app.stats = data::stats(app.tables.users.rows.len());
            }
            Task::none()
        }
        Message::SaveShortcut => {
            // Ctrl/Cmd+S submits whatever the active section can save.
            match app.section {
                super::Section::Settings => update(app, Message::Settings(settings::Message::Save)),
                super::Section::Users => update(app, Message::Forms(forms::Message::UserSubmit)),
                super::Section::Events => update(app, Message::Forms(forms::Message::EventSubmit)),
                _ => Task::none(),
            }
        }
        Message::ExportShortcut => update(
            app,
            Message::Overview(overview::Message::Export(ExportKind::Csv)),
        ),
    }
}

fn handle_table_event(app: &mut App, event: tables::Event) -> Task<Message> {
    match event {
        tables::Event::None => Task::none(),
        tables::Event::ViewRequested(kind, id) => {
            app.notifications.push(Notification::info(format!(
                "Viewing {} #{id}",
                kind.row_noun().to_lowercase()
            )));
            Task::none()
        }
        tables::Event::EditRequested(kind, id) => {
            app.notifications.push(Notification::info(format!(
                "Editing {} #{id}",
                kind.row_noun().to_lowercase()
            )));
            Task::none()
        }
        tables::Event::DeleteRequested(kind, id) => {
            let description = format!("Delete {} #{id}?", kind.row_noun().to_lowercase());
            Task::perform(
                AsyncMessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("Confirm deletion")
                    .set_description(description)
                    .set_buttons(MessageButtons::YesNo)
                    .show(),
                move |result| Message::DeleteConfirmed {
                    kind,
                    id,
                    confirmed: matches!(result, MessageDialogResult::Yes),
                },
            )
        }
    }
}

fn handle_form_event(app: &mut App, event: forms::Event) -> Task<Message> {
    match event {
        forms::Event::None => Task::none(),
        forms::Event::SubmissionStarted(kind) => {
            let resolved = match kind {
                FormKind::User => Message::Forms(forms::Message::UserSaved),
                FormKind::Event => Message::Forms(forms::Message::EventSaved),
            };
            after(SAVE_DELAY, resolved)
        }
        forms::Event::Invalid(reason) => {
            app.notifications.push(Notification::error(reason));
            Task::none()
        }
        forms::Event::Saved(kind) => {
            let text = match kind {
                FormKind::User => "User added successfully!",
                FormKind::Event => "Event added successfully!",
            };
            app.notifications.push(Notification::success(text));
            Task::none()
        }
    }
}

fn handle_settings_event(app: &mut App, event: settings::Event) -> Task<Message> {
    match event {
        settings::Event::None => Task::none(),
        settings::Event::ThemeSelected(mode) => {
            if app.theme_mode != mode {
                app.theme_mode = mode;
                app.charts.clear_caches();
            }
            Task::none()
        }
        settings::Event::Invalid(reason) => {
            app.notifications.push(Notification::error(reason));
            Task::none()
        }
        settings::Event::Save {
            state,
            tooltips,
            theme_mode,
        } => {
            app.dashboard_state = state;
            app.tooltips = tooltips;
            if app.theme_mode != theme_mode {
                app.theme_mode = theme_mode;
                app.charts.clear_caches();
            }

            if let Some(warning) = app.dashboard_state.save() {
                app.notifications.push(Notification::warning(warning));
            }
            if let Some(warning) = persist_config(app) {
                app.notifications.push(Notification::warning(warning));
            }
            app.notifications
                .push(Notification::success("Settings saved successfully!"));
            Task::none()
        }
    }
}

/// Writes the current preferences to `settings.toml`, returning a warning
/// message on failure.
fn persist_config(app: &App) -> Option<String> {
    let config = Config {
        theme_mode: app.theme_mode,
        refresh_interval_secs: Some(app.refresh_interval_secs),
        tooltips: Some(app.tooltips),
    };
    config::save(&config)
        .err()
        .map(|e| format!("Preferences could not be saved: {e}"))
}
