// SPDX-License-Identifier: MPL-2.0
//! Dashboard charts drawn with the canvas widget.
//!
//! Three fixed charts mirror the original dashboard: monthly visitors
//! (line), revenue split (doughnut), and event attendance (bar). All series
//! are hard-coded sample data from [`crate::data`]. Geometry is cached per
//! chart; caches must be cleared when the theme changes so axis colors
//! re-render.

pub mod bar;
pub mod doughnut;
pub mod line;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{canvas, Column, Container, Row, Text};
use iced::{Color, Element, Length};

/// Chart state held by the app (series plus cached geometry).
#[derive(Default)]
pub struct State {
    pub visitors: line::LineChart,
    pub revenue: doughnut::DoughnutChart,
    pub attendance: bar::BarChart,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops cached geometry so the next draw picks up new theme colors.
    pub fn clear_caches(&mut self) {
        self.visitors.clear_cache();
        self.revenue.clear_cache();
        self.attendance.clear_cache();
    }
}

/// Renders the three charts side by side, each in a titled panel.
pub fn view<Msg: 'static>(state: &State) -> Element<'_, Msg> {
    Row::new()
        .spacing(spacing::MD)
        .push(panel(
            "Visitors",
            &state.visitors,
            state.visitors.legend(),
            state.visitors.axis_labels(),
        ))
        .push(panel("Revenue", &state.revenue, state.revenue.legend(), &[]))
        .push(panel(
            "Events",
            &state.attendance,
            state.attendance.legend(),
            state.attendance.axis_labels(),
        ))
        .into()
}

fn panel<'a, Msg: 'static, P: canvas::Program<Msg> + 'a>(
    title: &'a str,
    program: &'a P,
    legend: Vec<(Color, &'static str)>,
    axis_labels: &'a [&'static str],
) -> Element<'a, Msg> {
    let chart = canvas::Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CHART_HEIGHT));

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::SUBTITLE))
        .push(chart);

    if !axis_labels.is_empty() {
        let mut labels = Row::new().width(Length::Fill);
        for label in axis_labels {
            labels = labels.push(
                Container::new(Text::new(*label).size(typography::CAPTION))
                    .center_x(Length::Fill),
            );
        }
        content = content.push(labels);
    }

    content = content.push(legend_row(legend));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn legend_row<'a, Msg: 'a>(entries: Vec<(Color, &'static str)>) -> Element<'a, Msg> {
    let mut row = Row::new().spacing(spacing::SM);
    for (color, label) in entries {
        let swatch = Text::new("\u{25A0}")
            .size(typography::CAPTION)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style { color: Some(color) });
        row = row
            .push(swatch)
            .push(Text::new(label).size(typography::CAPTION));
    }
    row.into()
}
