// SPDX-License-Identifier: MPL-2.0
//! Overview section: stat cards, countdown, recent activity, charts,
//! export actions.
//!
//! While the simulated initial load is running a placeholder is shown
//! instead of the stat cards.

use crate::data::{Activity, Stats};
use crate::ui::countdown::Remaining;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{charts, countdown};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Simulated export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Pdf,
    Print,
}

impl ExportKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Csv => "Export CSV",
            ExportKind::Pdf => "Export PDF",
            ExportKind::Print => "Print",
        }
    }

    /// Info toast shown when the export starts.
    #[must_use]
    pub fn start_message(self) -> &'static str {
        match self {
            ExportKind::Csv => "Exporting users to CSV\u{2026}",
            ExportKind::Pdf => "Generating PDF report\u{2026}",
            ExportKind::Print => "Preparing print view\u{2026}",
        }
    }

    /// Success toast shown when the simulated export resolves.
    #[must_use]
    pub fn done_message(self) -> &'static str {
        match self {
            ExportKind::Csv => "CSV export completed",
            ExportKind::Pdf => "PDF report ready",
            ExportKind::Print => "Sent to printer",
        }
    }
}

/// Messages emitted by the overview section.
#[derive(Debug, Clone)]
pub enum Message {
    Export(ExportKind),
}

/// Contextual data needed to render the overview.
pub struct ViewContext<'a> {
    pub loading: bool,
    pub stats: Stats,
    pub activity: &'a [Activity],
    pub charts: &'a charts::State,
    pub remaining: Remaining,
}

/// Render the overview section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.loading {
        return Container::new(Text::new("Loading dashboard\u{2026}").size(typography::TITLE))
            .width(Length::Fill)
            .padding(spacing::XL)
            .into();
    }

    let stats = Row::new()
        .spacing(spacing::MD)
        .push(stat_card("Total Visitors", ctx.stats.total_visitors.to_string()))
        .push(stat_card(
            "Revenue",
            format!("${}", group_thousands(ctx.stats.total_revenue)),
        ))
        .push(stat_card("Events", ctx.stats.total_events.to_string()))
        .push(stat_card("Artists", ctx.stats.total_artists.to_string()));

    let exports = Row::new()
        .spacing(spacing::SM)
        .push(export_button(ExportKind::Csv))
        .push(export_button(ExportKind::Pdf))
        .push(export_button(ExportKind::Print));

    Column::new()
        .spacing(spacing::MD)
        .push(stats)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(countdown_panel(ctx.remaining))
                .push(activity_panel(ctx.activity)),
        )
        .push(charts::view(ctx.charts))
        .push(exports)
        .into()
}

/// Groups a figure with comma thousands separators, the way the original
/// stat cards displayed revenue ("$45,678").
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn stat_card<'a>(label: &'static str, value: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(value).size(typography::DISPLAY))
        .push(Text::new(label).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn countdown_panel<'a>(remaining: Remaining) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Festival starts in").size(typography::SUBTITLE))
        .push(countdown::view(remaining));

    Container::new(content)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn activity_panel<'a>(activity: &'a [Activity]) -> Element<'a, Message> {
    let mut entries = Column::new()
        .spacing(spacing::XS)
        .push(Text::new("Recent Activity").size(typography::SUBTITLE));

    for entry in activity {
        entries = entries.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(entry.kind.glyph()))
                .push(Text::new(entry.message).size(typography::BODY))
                .push(Text::new(entry.time_ago).size(typography::CAPTION)),
        );
    }

    Container::new(entries)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn export_button<'a>(kind: ExportKind) -> Element<'a, Message> {
    button(Text::new(kind.label()))
        .on_press(Message::Export(kind))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost)
        .into()
}
