// SPDX-License-Identifier: MPL-2.0
//! Monthly visitors line chart.

use crate::data;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Inset between the canvas edge and the plot area.
const PLOT_INSET: f32 = 12.0;

/// Maps a data point into plot coordinates.
///
/// `index` runs over the series, `max` is the largest series value; y grows
/// downward in canvas space, so larger values land closer to the top.
fn plot_point(index: usize, count: usize, value: f32, max: f32, bounds: Rectangle) -> Point {
    let inner_width = bounds.width - 2.0 * PLOT_INSET;
    let inner_height = bounds.height - 2.0 * PLOT_INSET;
    let step = if count > 1 {
        inner_width / (count - 1) as f32
    } else {
        0.0
    };

    Point::new(
        PLOT_INSET + index as f32 * step,
        PLOT_INSET + inner_height * (1.0 - value / max),
    )
}

/// Visitors-per-month line chart with cached geometry.
pub struct LineChart {
    values: Vec<f32>,
    labels: Vec<&'static str>,
    cache: canvas::Cache,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            values: data::VISITOR_COUNTS.to_vec(),
            labels: data::VISITOR_MONTHS.to_vec(),
            cache: canvas::Cache::default(),
        }
    }
}

impl LineChart {
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Legend entries rendered under the canvas.
    #[must_use]
    pub fn legend(&self) -> Vec<(Color, &'static str)> {
        vec![(palette::BRAND_ORANGE, "Visitors")]
    }

    /// Axis labels rendered under the plot, one per data point.
    #[must_use]
    pub fn axis_labels(&self) -> &[&'static str] {
        &self.labels
    }

    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.values.iter().copied().fold(1.0, f32::max)
    }
}

impl<Message> canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let plot_bounds = Rectangle::with_size(bounds.size());
            let axis_color = theme.extended_palette().background.strong.color;
            let max = self.max_value();
            let count = self.values.len();

            // Axes
            let axes = canvas::Path::new(|b| {
                b.move_to(Point::new(PLOT_INSET, PLOT_INSET));
                b.line_to(Point::new(PLOT_INSET, bounds.height - PLOT_INSET));
                b.line_to(Point::new(
                    bounds.width - PLOT_INSET,
                    bounds.height - PLOT_INSET,
                ));
            });
            frame.stroke(
                &axes,
                canvas::Stroke::default().with_color(axis_color).with_width(1.0),
            );

            // Area fill under the series
            let area = canvas::Path::new(|b| {
                b.move_to(Point::new(PLOT_INSET, bounds.height - PLOT_INSET));
                for (i, value) in self.values.iter().enumerate() {
                    let p = plot_point(i, count, *value, max, plot_bounds);
                    b.line_to(p);
                }
                b.line_to(Point::new(
                    bounds.width - PLOT_INSET,
                    bounds.height - PLOT_INSET,
                ));
                b.close();
            });
            frame.fill(
                &area,
                Color {
                    a: opacity::CHART_FILL,
                    ..palette::BRAND_ORANGE
                },
            );

            // Series line
            let series = canvas::Path::new(|b| {
                for (i, value) in self.values.iter().enumerate() {
                    let p = plot_point(i, count, *value, max, plot_bounds);
                    if i == 0 {
                        b.move_to(p);
                    } else {
                        b.line_to(p);
                    }
                }
            });
            frame.stroke(
                &series,
                canvas::Stroke::default()
                    .with_color(palette::BRAND_ORANGE)
                    .with_width(2.0),
            );

            // Data point markers
            for (i, value) in self.values.iter().enumerate() {
                let p = plot_point(i, count, *value, max, plot_bounds);
                let marker = canvas::Path::circle(p, 3.0);
                frame.fill(&marker, palette::BRAND_ORANGE);
            }
        });

        vec![geometry]
    }
}
