// SPDX-License-Identifier: MPL-2.0
//! The application view: sidebar, header, active section panel, and the
//! toast overlay stacked on top.

use super::{App, Message, Section};
use crate::ui::countdown;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::tables::TableKind;
use crate::ui::{forms, overview, settings, sidebar, tables};
use chrono::Utc;
use iced::alignment::Vertical;
use iced::widget::{button, text_input, Column, Container, Row, Scrollable, Stack, Text};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let body = Row::new()
        .push(sidebar::view(app.section).map(Message::Sidebar))
        .push(
            Column::new()
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .push(header(app))
                .push(Scrollable::new(section_panel(app)).height(Length::Fill)),
        );

    let mut layers = Stack::new()
        .push(Container::new(body).width(Length::Fill).height(Length::Fill));
    if let Some(results) = search_overlay(app) {
        layers = layers.push(results);
    }
    layers
        .push(Toast::view_overlay(&app.notifications).map(Message::Notification))
        .into()
}

/// Header row: clock, quick search, theme toggle.
fn header(app: &App) -> Element<'_, Message> {
    let clock = Text::new(countdown::format_header_clock(app.now)).size(typography::BODY);

    let toggle_glyph = if app.theme_mode.is_dark() {
        "\u{2600}" // ☀
    } else {
        "\u{1F319}" // 🌙
    };
    let theme_toggle = button(Text::new(toggle_glyph))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let search_input = text_input("Search site\u{2026}", app.quick_search.input())
        .on_input(Message::SearchInputChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(240.0));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(clock)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(search_input)
        .push(theme_toggle)
        .into()
}

/// Quick-search dropdown, floated over the content below the header so it
/// never pushes the section panel down; `None` while no search has resolved.
pub(super) fn search_overlay(app: &App) -> Option<Element<'_, Message>> {
    let results = app.quick_search.results()?;

    let mut entries = Column::new().spacing(spacing::XXS);
    if results.is_empty() {
        entries = entries.push(Text::new("No results found").size(typography::BODY));
    } else {
        for page in results {
            entries = entries.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new(page.title).size(typography::BODY))
                    .push(Text::new(page.category).size(typography::CAPTION))
                    .push(Text::new(page.url).size(typography::CAPTION)),
            );
        }
    }

    let dropdown = Container::new(entries)
        .width(Length::Fixed(sizing::SEARCH_DROPDOWN_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::panel);

    Some(
        Container::new(dropdown)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(Vertical::Top)
            .padding([sizing::HEADER_CLEARANCE, spacing::MD])
            .into(),
    )
}

fn section_panel(app: &App) -> Element<'_, Message> {
    match app.section {
        Section::Overview => overview::view(overview::ViewContext {
            loading: app.loading,
            stats: app.stats,
            activity: &app.activity,
            charts: &app.charts,
            remaining: app.countdown.remaining(app.now.with_timezone(&Utc)),
        })
        .map(Message::Overview),
        Section::Users => Column::new()
            .spacing(spacing::MD)
            .push(tables::view(&app.tables, TableKind::Users, app.tooltips).map(Message::Tables))
            .push(forms::user_view(&app.forms).map(Message::Forms))
            .into(),
        Section::Orders => {
            tables::view(&app.tables, TableKind::Orders, app.tooltips).map(Message::Tables)
        }
        Section::Messages => {
            tables::view(&app.tables, TableKind::Messages, app.tooltips).map(Message::Tables)
        }
        Section::Events => forms::event_view(&app.forms).map(Message::Forms),
        Section::Settings => settings::view(&app.settings).map(Message::Settings),
    }
}
