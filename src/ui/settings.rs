// SPDX-License-Identifier: MPL-2.0
//! Settings panel.
//!
//! Edits the persisted dashboard state (organization, contact email, items
//! per page, email alerts) plus the theme mode and tooltips preference.
//! Saving hands the parsed values back to the app, which writes both stores.

use crate::app::persisted_state::DashboardState;
use crate::config::Config;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::forms::email_is_valid;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, checkbox, radio, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

/// Edit buffers for the settings form.
#[derive(Debug, Default)]
pub struct State {
    pub organization: String,
    pub contact_email: String,
    pub items_per_page_input: String,
    pub email_alerts: bool,
    pub tooltips: bool,
    pub theme_mode: ThemeMode,
}

impl State {
    /// Seeds the buffers from the loaded stores.
    #[must_use]
    pub fn from_stores(state: &DashboardState, config: &Config) -> Self {
        Self {
            organization: state.organization.clone(),
            contact_email: state.contact_email.clone(),
            items_per_page_input: state.items_per_page.to_string(),
            email_alerts: state.email_alerts,
            tooltips: config.tooltips.unwrap_or(true),
            theme_mode: config.theme_mode,
        }
    }
}

/// Messages emitted by the settings panel.
#[derive(Debug, Clone)]
pub enum Message {
    OrganizationChanged(String),
    ContactEmailChanged(String),
    ItemsPerPageChanged(String),
    EmailAlertsToggled(bool),
    TooltipsToggled(bool),
    ThemeSelected(ThemeMode),
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Theme selection applies immediately (and persists with Save).
    ThemeSelected(ThemeMode),
    /// Validation failed with a user-facing reason.
    Invalid(&'static str),
    /// Parsed values ready to persist.
    Save {
        state: DashboardState,
        tooltips: bool,
        theme_mode: ThemeMode,
    },
}

/// Process a settings message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::OrganizationChanged(value) => {
            state.organization = value;
            Event::None
        }
        Message::ContactEmailChanged(value) => {
            state.contact_email = value;
            Event::None
        }
        Message::ItemsPerPageChanged(value) => {
            state.items_per_page_input = value;
            Event::None
        }
        Message::EmailAlertsToggled(enabled) => {
            state.email_alerts = enabled;
            Event::None
        }
        Message::TooltipsToggled(enabled) => {
            state.tooltips = enabled;
            Event::None
        }
        Message::ThemeSelected(mode) => {
            state.theme_mode = mode;
            Event::ThemeSelected(mode)
        }
        Message::Save => {
            if !state.contact_email.is_empty() && !email_is_valid(&state.contact_email) {
                return Event::Invalid("Please enter a valid contact email");
            }
            let Ok(items_per_page) = state.items_per_page_input.trim().parse::<u32>() else {
                return Event::Invalid("Items per page must be a number");
            };
            if items_per_page == 0 {
                return Event::Invalid("Items per page must be at least 1");
            }
            Event::Save {
                state: DashboardState {
                    organization: state.organization.clone(),
                    contact_email: state.contact_email.clone(),
                    email_alerts: state.email_alerts,
                    items_per_page,
                },
                tooltips: state.tooltips,
                theme_mode: state.theme_mode,
            }
        }
    }
}

/// Render the settings panel.
pub fn view(state: &State) -> Element<'_, Message> {
    let mut theme_row = Row::new().spacing(spacing::MD);
    for mode in ThemeMode::ALL {
        theme_row = theme_row.push(radio(
            mode.label(),
            mode,
            Some(state.theme_mode),
            Message::ThemeSelected,
        ));
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Settings").size(typography::TITLE))
        .push(
            text_input("Organization name", &state.organization)
                .on_input(Message::OrganizationChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Contact email", &state.contact_email)
                .on_input(Message::ContactEmailChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Items per page", &state.items_per_page_input)
                .on_input(Message::ItemsPerPageChanged)
                .padding(spacing::XS)
                .width(Length::Fixed(120.0)),
        )
        .push(
            checkbox(state.email_alerts).label("Email alerts").on_toggle(Message::EmailAlertsToggled),
        )
        .push(checkbox(state.tooltips).label("Show tooltips").on_toggle(Message::TooltipsToggled))
        .push(Text::new("Theme").size(typography::SUBTITLE))
        .push(theme_row)
        .push(
            button(Text::new("Save Settings"))
                .on_press(Message::Save)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        State {
            organization: "Street Art Festival".into(),
            contact_email: "admin@festival.example".into(),
            items_per_page_input: "25".into(),
            email_alerts: true,
            tooltips: true,
            theme_mode: ThemeMode::Dark,
        }
    }

    #[test]
    fn save_returns_parsed_values() {
        let mut state = filled();
        let event = update(Message::Save, &mut state);
        let Event::Save {
            state: saved,
            tooltips,
            theme_mode,
        } = event
        else {
            panic!("expected a save event");
        };
        assert_eq!(saved.organization, "Street Art Festival");
        assert_eq!(saved.items_per_page, 25);
        assert!(saved.email_alerts);
        assert!(tooltips);
        assert_eq!(theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn save_rejects_invalid_contact_email() {
        let mut state = filled();
        state.contact_email = "not-an-email".into();
        assert!(matches!(update(Message::Save, &mut state), Event::Invalid(_)));
    }

    #[test]
    fn save_allows_empty_contact_email() {
        let mut state = filled();
        state.contact_email.clear();
        assert!(matches!(update(Message::Save, &mut state), Event::Save { .. }));
    }

    #[test]
    fn save_rejects_non_numeric_items_per_page() {
        let mut state = filled();
        state.items_per_page_input = "ten".into();
        assert!(matches!(update(Message::Save, &mut state), Event::Invalid(_)));

        state.items_per_page_input = "0".into();
        assert!(matches!(update(Message::Save, &mut state), Event::Invalid(_)));
    }

    #[test]
    fn theme_selection_emits_event() {
        let mut state = filled();
        let event = update(Message::ThemeSelected(ThemeMode::Light), &mut state);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert!(matches!(event, Event::ThemeSelected(ThemeMode::Light)));
    }

    #[test]
    fn from_stores_seeds_the_buffers() {
        let dashboard = DashboardState {
            organization: "Festboard".into(),
            contact_email: "hello@festival.example".into(),
            email_alerts: false,
            items_per_page: 10,
        };
        let config = Config::default();
        let state = State::from_stores(&dashboard, &config);
        assert_eq!(state.items_per_page_input, "10");
        assert!(!state.email_alerts);
        assert_eq!(state.theme_mode, config.theme_mode);
    }

    #[test]
    fn settings_view_renders() {
        let state = filled();
        let _element = view(&state);
    }
}
