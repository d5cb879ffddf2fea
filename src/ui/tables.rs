// SPDX-License-Identifier: MPL-2.0
//! Data tables for the Users, Orders, and Messages sections.
//!
//! Each table renders its hard-coded rows with View/Edit/Delete actions.
//! Deletion is a two-step flow driven by the parent: the table emits
//! [`Event::DeleteRequested`], the app confirms and marks the row as
//! removing (rendered dimmed), and removal happens after a short delay.

use crate::data::{Row, TableData};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::tooltip::Position;
use iced::widget::{button, text_input, Column, Container, Row as WRow, Text};
use iced::{Element, Length};

/// Which dashboard table a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Users,
    Orders,
    Messages,
}

impl TableKind {
    /// Noun used in toasts ("Item #N deleted successfully" keeps the
    /// original wording for users).
    #[must_use]
    pub fn row_noun(self) -> &'static str {
        match self {
            TableKind::Users => "Item",
            TableKind::Orders => "Order",
            TableKind::Messages => "Message",
        }
    }
}

/// Table component state.
#[derive(Debug)]
pub struct State {
    pub users: TableData,
    pub orders: TableData,
    pub messages: TableData,
    pub filter: String,
    /// Row currently fading out ahead of removal.
    pub removing: Option<(TableKind, u32)>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: crate::data::users_table(),
            orders: crate::data::orders_table(),
            messages: crate::data::messages_table(),
            filter: String::new(),
            removing: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &TableData {
        match kind {
            TableKind::Users => &self.users,
            TableKind::Orders => &self.orders,
            TableKind::Messages => &self.messages,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut TableData {
        match kind {
            TableKind::Users => &mut self.users,
            TableKind::Orders => &mut self.orders,
            TableKind::Messages => &mut self.messages,
        }
    }

    /// Marks a row as fading out; it stays visible (dimmed) until
    /// [`State::finish_removal`].
    pub fn begin_removal(&mut self, kind: TableKind, id: u32) {
        self.removing = Some((kind, id));
    }

    /// Actually removes the fading row. Returns `true` if a row was removed.
    pub fn finish_removal(&mut self, kind: TableKind, id: u32) -> bool {
        if self.removing == Some((kind, id)) {
            self.removing = None;
        }
        self.table_mut(kind).remove(id)
    }
}

/// Messages emitted by the tables.
#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(String),
    View(TableKind, u32),
    Edit(TableKind, u32),
    Delete(TableKind, u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ViewRequested(TableKind, u32),
    EditRequested(TableKind, u32),
    DeleteRequested(TableKind, u32),
}

/// Process a table message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::FilterChanged(value) => {
            state.filter = value;
            Event::None
        }
        Message::View(kind, id) => Event::ViewRequested(kind, id),
        Message::Edit(kind, id) => Event::EditRequested(kind, id),
        Message::Delete(kind, id) => Event::DeleteRequested(kind, id),
    }
}

/// Render one table section: filter input, header row, data rows.
pub fn view(state: &State, kind: TableKind, tooltips: bool) -> Element<'_, Message> {
    let table = state.table(kind);

    let filter = text_input("Filter rows\u{2026}", &state.filter)
        .on_input(Message::FilterChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(260.0));

    let mut rows = Column::new()
        .spacing(spacing::XXS)
        .push(header_row(table.headers));

    let mut any = false;
    for row in table.filtered(&state.filter) {
        let fading = state.removing == Some((kind, row.id));
        rows = rows.push(data_row(kind, row, fading, tooltips));
        any = true;
    }
    if !any {
        rows = rows.push(
            Text::new("No matching rows")
                .size(typography::BODY),
        );
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(filter)
        .push(rows);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn header_row<'a>(headers: &'static [&'static str]) -> Element<'a, Message> {
    let mut row = WRow::new().spacing(spacing::SM);
    for header in headers {
        row = row.push(
            Text::new(*header)
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        );
    }
    row = row.push(
        Text::new("Actions")
            .size(typography::BODY)
            .width(Length::FillPortion(2)),
    );
    row.into()
}

fn data_row<'a>(
    kind: TableKind,
    row: &'a Row,
    fading: bool,
    tooltips: bool,
) -> Element<'a, Message> {
    let mut cells = WRow::new().spacing(spacing::SM).align_y(Vertical::Center);
    for cell in &row.cells {
        cells = cells.push(
            Text::new(cell.as_str())
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        );
    }

    let actions = WRow::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(2))
        .push(action(
            "\u{1F441}", // 👁
            "View",
            Message::View(kind, row.id),
            tooltips,
        ))
        .push(action(
            "\u{270F}", // ✏
            "Edit",
            Message::Edit(kind, row.id),
            tooltips,
        ))
        .push(danger_action(
            "\u{1F5D1}", // 🗑
            "Delete",
            Message::Delete(kind, row.id),
            tooltips,
        ));
    cells = cells.push(actions);

    let rendered: Element<'a, Message> = cells.into();
    if fading {
        // Dimmed while the removal delay runs.
        Container::new(rendered)
            .style(|theme: &iced::Theme| iced::widget::container::Style {
                text_color: Some(iced::Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..theme.extended_palette().background.base.text
                }),
                ..Default::default()
            })
            .into()
    } else {
        rendered
    }
}

fn action<'a>(
    glyph: &'static str,
    tip: &'static str,
    message: Message,
    tooltips: bool,
) -> Element<'a, Message> {
    let btn = button(Text::new(glyph).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    if tooltips {
        styles::tooltip::styled(btn, tip, Position::Top).into()
    } else {
        btn.into()
    }
}

fn danger_action<'a>(
    glyph: &'static str,
    tip: &'static str,
    message: Message,
    tooltips: bool,
) -> Element<'a, Message> {
    let btn = button(Text::new(glyph).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::danger);

    if tooltips {
        styles::tooltip::styled(btn, tip, Position::Top).into()
    } else {
        btn.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_updates_state_without_event() {
        let mut state = State::default();
        let event = update(Message::FilterChanged("john".into()), &mut state);
        assert_eq!(state.filter, "john");
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn delete_message_bubbles_up() {
        let mut state = State::default();
        let event = update(Message::Delete(TableKind::Users, 7), &mut state);
        assert!(matches!(event, Event::DeleteRequested(TableKind::Users, 7)));
        // Nothing removed yet; the app confirms first.
        assert_eq!(state.users.rows.len(), 8);
    }

    #[test]
    fn removal_runs_in_two_steps() {
        let mut state = State::default();
        state.begin_removal(TableKind::Users, 7);
        assert_eq!(state.removing, Some((TableKind::Users, 7)));
        assert_eq!(state.users.rows.len(), 8);

        assert!(state.finish_removal(TableKind::Users, 7));
        assert!(state.removing.is_none());
        assert_eq!(state.users.rows.len(), 7);
    }

    #[test]
    fn finishing_an_unknown_removal_is_safe() {
        let mut state = State::default();
        assert!(!state.finish_removal(TableKind::Orders, 9999));
    }

    #[test]
    fn tables_render_for_every_kind() {
        let state = State::default();
        for kind in [TableKind::Users, TableKind::Orders, TableKind::Messages] {
            let _element = view(&state, kind, true);
            let _element = view(&state, kind, false);
        }
    }
}
