// SPDX-License-Identifier: MPL-2.0
//! Simulated submission forms (add user, add event).
//!
//! Submitting validates, flips the submit button into a disabled "Saving…"
//! state, and resolves through a parent-scheduled delay. Nothing can
//! actually fail past validation; the whole flow is a happy-path simulation.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Text};
use iced::{Element, Length};

/// Roles offered by the user form.
pub const ROLES: [&str; 4] = ["Visitor", "Artist", "Volunteer", "Sponsor"];

/// Checks the email shape the original form enforced: a non-empty local
/// part, exactly one `@`, a dot splitting the domain into non-empty halves,
/// and no whitespace anywhere.
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(i) => i > 0 && i + 1 < domain.len(),
        None => false,
    }
}

/// Which form a message or event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    User,
    Event,
}

/// Add-user form fields.
#[derive(Debug, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Option<&'static str>,
    pub saving: bool,
}

/// Add-event form fields.
#[derive(Debug, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub description: String,
    pub saving: bool,
}

/// State for both forms.
#[derive(Debug, Default)]
pub struct State {
    pub user: UserForm,
    pub event: EventForm,
}

/// Messages emitted by the forms.
#[derive(Debug, Clone)]
pub enum Message {
    UserNameChanged(String),
    UserEmailChanged(String),
    UserRoleSelected(&'static str),
    UserSubmit,
    /// The simulated save delay elapsed.
    UserSaved,
    EventTitleChanged(String),
    EventDateChanged(String),
    EventDescriptionChanged(String),
    EventSubmit,
    EventSaved,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation passed; the parent schedules the save delay.
    SubmissionStarted(FormKind),
    /// Validation failed with a user-facing reason.
    Invalid(&'static str),
    /// The save delay elapsed and the form was reset.
    Saved(FormKind),
}

/// Process a form message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::UserNameChanged(value) => {
            state.user.name = value;
            Event::None
        }
        Message::UserEmailChanged(value) => {
            state.user.email = value;
            Event::None
        }
        Message::UserRoleSelected(role) => {
            state.user.role = Some(role);
            Event::None
        }
        Message::UserSubmit => {
            if state.user.saving {
                return Event::None;
            }
            if state.user.name.trim().is_empty() {
                return Event::Invalid("Please enter a name");
            }
            if !email_is_valid(&state.user.email) {
                return Event::Invalid("Please enter a valid email address");
            }
            state.user.saving = true;
            Event::SubmissionStarted(FormKind::User)
        }
        Message::UserSaved => {
            state.user = UserForm::default();
            Event::Saved(FormKind::User)
        }
        Message::EventTitleChanged(value) => {
            state.event.title = value;
            Event::None
        }
        Message::EventDateChanged(value) => {
            state.event.date = value;
            Event::None
        }
        Message::EventDescriptionChanged(value) => {
            state.event.description = value;
            Event::None
        }
        Message::EventSubmit => {
            if state.event.saving {
                return Event::None;
            }
            if state.event.title.trim().is_empty() {
                return Event::Invalid("Please enter an event title");
            }
            if state.event.date.trim().is_empty() {
                return Event::Invalid("Please enter an event date");
            }
            state.event.saving = true;
            Event::SubmissionStarted(FormKind::Event)
        }
        Message::EventSaved => {
            state.event = EventForm::default();
            Event::Saved(FormKind::Event)
        }
    }
}

/// Render the add-user form.
pub fn user_view(state: &State) -> Element<'_, Message> {
    let form = &state.user;

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Add User").size(typography::SUBTITLE))
        .push(
            text_input("Name", &form.name)
                .on_input(Message::UserNameChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Email", &form.email)
                .on_input(Message::UserEmailChanged)
                .padding(spacing::XS),
        )
        .push(
            pick_list(ROLES, form.role, Message::UserRoleSelected)
                .placeholder("Role")
                .padding(spacing::XS),
        )
        .push(submit_button(form.saving, "Add User", Message::UserSubmit));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// Render the add-event form.
pub fn event_view(state: &State) -> Element<'_, Message> {
    let form = &state.event;

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Add Event").size(typography::SUBTITLE))
        .push(
            text_input("Title", &form.title)
                .on_input(Message::EventTitleChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Date (YYYY-MM-DD)", &form.date)
                .on_input(Message::EventDateChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Description", &form.description)
                .on_input(Message::EventDescriptionChanged)
                .padding(spacing::XS),
        )
        .push(submit_button(form.saving, "Add Event", Message::EventSubmit));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn submit_button<'a>(saving: bool, label: &'static str, message: Message) -> Element<'a, Message> {
    if saving {
        button(Text::new("Saving\u{2026}"))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::disabled())
            .into()
    } else {
        button(Text::new(label))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .into()
    }
}
