// SPDX-License-Identifier: MPL-2.0
//! Event attendance bar chart.

use crate::data;
use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

/// Inset between the canvas edge and the plot area.
const PLOT_INSET: f32 = 12.0;

/// Fraction of each slot occupied by the bar (the rest is gap).
const BAR_FRACTION: f32 = 0.7;

/// Computes the rectangle for one bar in plot coordinates.
fn bar_rect(index: usize, count: usize, value: f32, max: f32, bounds: Rectangle) -> Rectangle {
    let inner_width = bounds.width - 2.0 * PLOT_INSET;
    let inner_height = bounds.height - 2.0 * PLOT_INSET;
    let slot = inner_width / count as f32;
    let bar_width = slot * BAR_FRACTION;
    let height = inner_height * (value / max);

    Rectangle {
        x: PLOT_INSET + index as f32 * slot + (slot - bar_width) / 2.0,
        y: PLOT_INSET + (inner_height - height),
        width: bar_width,
        height,
    }
}

/// Attendance-per-event-type bar chart with cached geometry.
pub struct BarChart {
    values: Vec<f32>,
    labels: Vec<&'static str>,
    cache: canvas::Cache,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            values: data::EVENT_ATTENDEES.to_vec(),
            labels: data::EVENT_LABELS.to_vec(),
            cache: canvas::Cache::default(),
        }
    }
}

impl BarChart {
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Legend entries rendered under the canvas.
    #[must_use]
    pub fn legend(&self) -> Vec<(Color, &'static str)> {
        vec![(palette::BRAND_BLUE, "Attendees")]
    }

    /// Axis labels rendered under the plot, one per bar.
    #[must_use]
    pub fn axis_labels(&self) -> &[&'static str] {
        &self.labels
    }

    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.values.iter().copied().fold(1.0, f32::max)
    }
}

impl<Message> canvas::Program<Message> for BarChart {
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

            // Baseline
            let baseline = canvas::Path::line(
                Point::new(PLOT_INSET, bounds.height - PLOT_INSET),
                Point::new(bounds.width - PLOT_INSET, bounds.height - PLOT_INSET),
            );
            frame.stroke(
                &baseline,
                canvas::Stroke::default().with_color(axis_color).with_width(1.0),
            );

            for (i, value) in self.values.iter().enumerate() {
                let rect = bar_rect(i, count, *value, max, plot_bounds);
                let path = canvas::Path::rectangle(
                    Point::new(rect.x, rect.y),
                    Size::new(rect.width, rect.height),
                );
                frame.fill(&path, palette::BRAND_BLUE);
            }
        });

        vec![geometry]
    }
}
