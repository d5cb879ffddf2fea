// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard sections.
//!
//! The `App` struct wires the components (sidebar, tables, forms, settings,
//! charts, notifications) together and translates their events into side
//! effects like store writes, simulated delays, and toasts. Policy decisions
//! (window sizing, persistence format, shortcut routing) stay close to the
//! update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
pub mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::config::{self, DEFAULT_REFRESH_INTERVAL_SECS};
use crate::data;
use crate::search::QuickSearch;
use crate::ui::countdown::{Countdown, DEMO_LEAD_DAYS};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{charts, forms, settings, tables};
use chrono::{DateTime, Local, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::DashboardState;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging UI components and persisted stores.
pub struct App {
    section: Section,
    notifications: notifications::Manager,
    tables: tables::State,
    forms: forms::State,
    settings: settings::State,
    charts: charts::State,
    quick_search: QuickSearch,
    countdown: Countdown,
    /// Persisted settings-form values.
    dashboard_state: DashboardState,
    theme_mode: ThemeMode,
    tooltips: bool,
    refresh_interval_secs: u64,
    /// True while the simulated initial load is running.
    loading: bool,
    stats: data::Stats,
    activity: Vec<data::Activity>,
    /// Wall clock shown in the header; advanced by the 1 s tick.
    now: DateTime<Local>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let tables = tables::State::default();
        let stats = data::stats(tables.users.rows.len());
        let now = Local::now();

        Self {
            section: Section::default(),
            notifications: notifications::Manager::new(),
            tables,
            forms: forms::State::default(),
            settings: settings::State::default(),
            charts: charts::State::new(),
            quick_search: QuickSearch::new(),
            countdown: Countdown::days_from(Utc::now(), DEMO_LEAD_DAYS),
            dashboard_state: DashboardState::default(),
            theme_mode: ThemeMode::default(),
            tooltips: true,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            loading: true,
            stats,
            activity: Vec::new(),
            now,
        }
    }
}

impl App {
    /// Initializes application state from the persisted stores and kicks off
    /// the simulated initial load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let mut app = App::default();

        let config = match config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("festboard: failed to load preferences: {e}");
                app.notifications.push(Notification::warning(
                    "Preferences could not be read; defaults restored",
                ));
                config::Config::default()
            }
        };
        app.theme_mode = config.theme_mode;
        app.tooltips = config.tooltips.unwrap_or(true);
        app.refresh_interval_secs = config
            .refresh_interval_secs
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS);

        let (dashboard_state, state_warning) = DashboardState::load();
        app.dashboard_state = dashboard_state;
        if let Some(warning) = state_warning {
            app.notifications.push(Notification::warning(warning));
        }

        app.settings = settings::State::from_stores(&app.dashboard_state, &config);

        let task = update::after(update::LOAD_DELAY, Message::DataLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - Festboard", self.section.label())
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let needs_tick = self.notifications.has_notifications() || self.quick_search.is_pending();

        Subscription::batch([
            subscription::create_clock_subscription(),
            subscription::create_tick_subscription(needs_tick),
            subscription::create_refresh_subscription(self.loading, self.refresh_interval_secs),
            subscription::create_event_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sidebar;
    use crate::ui::tables::TableKind;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    #[test]
    fn app_starts_on_the_overview_section() {
        let app = App::default();
        assert_eq!(app.section, Section::Overview);
        assert!(app.loading);
    }

    #[test]
    fn sidebar_activation_switches_the_section() {
        let mut app = App::default();
        let _ = app.update(Message::Sidebar(sidebar::Message::Activate(Section::Users)));
        assert_eq!(app.section, Section::Users);

        let _ = app.update(Message::Sidebar(sidebar::Message::Activate(
            Section::Settings,
        )));
        assert_eq!(app.section, Section::Settings);
    }

    #[test]
    fn data_loaded_ends_the_loading_state() {
        let mut app = App::default();
        let _ = app.update(Message::DataLoaded);
        assert!(!app.loading);
        assert_eq!(app.stats.total_visitors, 1200);
        assert!(!app.activity.is_empty());
    }

    #[tokio::test]
    async fn theme_toggle_flips_and_persists() {
        with_temp_dirs(|config_root| {
            let mut app = App::default();
            assert_eq!(app.theme_mode, ThemeMode::Light);

            let _ = app.update(Message::ToggleTheme);
            assert_eq!(app.theme_mode, ThemeMode::Dark);

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("dark"));
        });
    }

    #[tokio::test]
    async fn persisted_dark_theme_survives_a_restart() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let _ = app.update(Message::ToggleTheme);
            assert_eq!(app.theme_mode, ThemeMode::Dark);

            let (restarted, _task) = App::new(Flags::default());
            assert_eq!(restarted.theme_mode, ThemeMode::Dark);
            assert!(matches!(restarted.theme(), Theme::Dark));
        });
    }

    #[tokio::test]
    async fn confirmed_delete_removes_row_and_toasts() {
        let mut app = App::default();

        let _ = app.update(Message::DeleteConfirmed {
            kind: TableKind::Users,
            id: 7,
            confirmed: true,
        });
        // Fade phase: row still present, marked as removing.
        assert_eq!(app.tables.users.rows.len(), 8);
        assert_eq!(app.tables.removing, Some((TableKind::Users, 7)));

        let _ = app.update(Message::RowRemovalDue {
            kind: TableKind::Users,
            id: 7,
        });
        assert_eq!(app.tables.users.rows.len(), 7);
        assert_eq!(app.stats.total_visitors, 1050);

        let toast = app
            .notifications
            .visible()
            .next()
            .expect("a toast should be showing");
        assert_eq!(toast.message(), "Item #7 deleted successfully");
    }

    #[tokio::test]
    async fn declined_delete_leaves_the_row() {
        let mut app = App::default();

        let _ = app.update(Message::DeleteConfirmed {
            kind: TableKind::Users,
            id: 7,
            confirmed: false,
        });
        let _ = app.update(Message::RowRemovalDue {
            kind: TableKind::Users,
            id: 7,
        });

        // Removal was never begun, so the due message is a no-op.
        assert_eq!(app.tables.users.rows.len(), 8);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn stale_removal_due_is_harmless() {
        let mut app = App::default();
        let _ = app.update(Message::RowRemovalDue {
            kind: TableKind::Orders,
            id: 9999,
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn invalid_user_form_shows_error_toast() {
        let mut app = App::default();
        app.forms.user.name = "Maria".into();
        app.forms.user.email = "nope".into();

        let _ = app.update(Message::Forms(forms::Message::UserSubmit));
        assert!(!app.forms.user.saving);
        let toast = app.notifications.visible().next().expect("error toast");
        assert_eq!(
            toast.severity(),
            crate::ui::notifications::Severity::Error
        );
    }

    #[tokio::test]
    async fn user_form_save_resolves_with_success_toast() {
        let mut app = App::default();
        app.forms.user.name = "Maria".into();
        app.forms.user.email = "maria@example.com".into();

        let _ = app.update(Message::Forms(forms::Message::UserSubmit));
        assert!(app.forms.user.saving);

        let _ = app.update(Message::Forms(forms::Message::UserSaved));
        assert!(!app.forms.user.saving);
        assert!(app.forms.user.name.is_empty());
        let toast = app.notifications.visible().next().expect("success toast");
        assert_eq!(toast.message(), "User added successfully!");
    }

    #[tokio::test]
    async fn export_finish_pushes_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Overview(crate::ui::overview::Message::Export(
            crate::ui::overview::ExportKind::Csv,
        )));
        // The info toast appears immediately.
        assert_eq!(app.notifications.visible_count(), 1);

        let _ = app.update(Message::ExportFinished(
            crate::ui::overview::ExportKind::Csv,
        ));
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[tokio::test]
    async fn settings_save_persists_both_stores() {
        with_temp_dirs(|root| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::OrganizationChanged(
                "Street Art Festival".into(),
            )));
            let _ = app.update(Message::Settings(settings::Message::ItemsPerPageChanged(
                "25".into(),
            )));
            let _ = app.update(Message::Settings(settings::Message::Save));

            assert_eq!(app.dashboard_state.organization, "Street Art Festival");
            assert_eq!(app.dashboard_state.items_per_page, 25);
            assert!(root.join("state.cbor").exists());
            assert!(root.join("settings.toml").exists());

            let toast = app.notifications.visible().next().expect("success toast");
            assert_eq!(toast.message(), "Settings saved successfully!");
        });
    }

    #[test]
    fn clock_tick_advances_the_header_clock() {
        let mut app = App::default();
        let before = app.now;
        let _ = app.update(Message::ClockTick);
        assert!(app.now >= before);
    }

    #[test]
    fn search_input_arms_debounce_and_tick_resolves_it() {
        let mut app = App::default();
        let _ = app.update(Message::SearchInputChanged("festival".into()));
        assert!(app.quick_search.is_pending());

        let _ = app.update(Message::Tick(
            std::time::Instant::now() + crate::search::DEBOUNCE,
        ));
        assert!(!app.quick_search.is_pending());
        assert_eq!(app.quick_search.results().map(<[_]>::len), Some(1));
    }

    #[tokio::test]
    async fn save_shortcut_submits_the_active_sections_form() {
        let mut app = App::default();

        // Sections without a form ignore the shortcut.
        for section in [Section::Overview, Section::Orders, Section::Messages] {
            app.section = section;
            let _ = app.update(Message::SaveShortcut);
            assert!(!app.notifications.has_notifications());
        }

        app.section = Section::Users;
        app.forms.user.name = "Maria Vega".into();
        app.forms.user.email = "maria@example.com".into();
        let _ = app.update(Message::SaveShortcut);
        assert!(app.forms.user.saving);

        app.section = Section::Events;
        app.forms.event.title = "Graffiti Basics".into();
        app.forms.event.date = "2026-09-12".into();
        let _ = app.update(Message::SaveShortcut);
        assert!(app.forms.event.saving);
    }

    #[tokio::test]
    async fn save_shortcut_on_settings_saves_the_stores() {
        with_temp_dirs(|root| {
            let mut app = App::default();
            app.section = Section::Settings;
            app.settings.organization = "Street Art Festival".into();
            app.settings.items_per_page_input = "25".into();

            let _ = app.update(Message::SaveShortcut);

            assert_eq!(app.dashboard_state.organization, "Street Art Festival");
            assert!(root.join("settings.toml").exists());
            assert!(root.join("state.cbor").exists());
            let toast = app.notifications.visible().next().expect("success toast");
            assert_eq!(toast.message(), "Settings saved successfully!");
        });
    }

    #[tokio::test]
    async fn export_shortcut_starts_the_csv_export() {
        let mut app = App::default();
        let _ = app.update(Message::ExportShortcut);

        let toast = app.notifications.visible().next().expect("info toast");
        assert_eq!(toast.message(), "Exporting users to CSV\u{2026}");
        assert_eq!(toast.severity(), notifications::Severity::Info);
    }

    #[test]
    fn search_results_float_in_an_overlay() {
        let mut app = App::default();
        assert!(view::search_overlay(&app).is_none());

        let _ = app.update(Message::SearchInputChanged("festival".into()));
        let _ = app.update(Message::Tick(
            std::time::Instant::now() + crate::search::DEBOUNCE,
        ));
        assert!(view::search_overlay(&app).is_some());
        let _element = app.view();
    }

    #[test]
    fn title_tracks_the_active_section() {
        let mut app = App::default();
        assert_eq!(app.title(), "Overview - Festboard");
        let _ = app.update(Message::Sidebar(sidebar::Message::Activate(
            Section::Orders,
        )));
        assert_eq!(app.title(), "Orders - Festboard");
    }
}
