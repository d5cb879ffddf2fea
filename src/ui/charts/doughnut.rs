// SPDX-License-Identifier: MPL-2.0
//! Revenue split doughnut chart.

use crate::data;
use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Radians, Rectangle, Theme};

/// Ring thickness as a fraction of the outer radius.
const RING_FRACTION: f32 = 0.35;

/// Segment colors, in series order (the original chart's palette).
const SEGMENT_COLORS: [Color; 4] = [
    palette::BRAND_ORANGE,
    palette::BRAND_BLUE,
    palette::BRAND_INK,
    palette::GRAY_200,
];

/// Converts the share series into cumulative (start, end) angles in radians,
/// starting at twelve o'clock.
fn segment_angles(shares: &[f32]) -> Vec<(f32, f32)> {
    let total: f32 = shares.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let start_offset = -std::f32::consts::FRAC_PI_2;
    let mut angles = Vec::with_capacity(shares.len());
    let mut cursor = 0.0;
    for share in shares {
        let sweep = share / total * std::f32::consts::TAU;
        angles.push((start_offset + cursor, start_offset + cursor + sweep));
        cursor += sweep;
    }
    angles
}

/// Revenue doughnut chart with cached geometry.
pub struct DoughnutChart {
    shares: Vec<f32>,
    labels: Vec<&'static str>,
    cache: canvas::Cache,
}

impl Default for DoughnutChart {
    fn default() -> Self {
        Self {
            shares: data::REVENUE_SHARES.to_vec(),
            labels: data::REVENUE_LABELS.to_vec(),
            cache: canvas::Cache::default(),
        }
    }
}

impl DoughnutChart {
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Legend entries rendered under the canvas.
    #[must_use]
    pub fn legend(&self) -> Vec<(Color, &'static str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (SEGMENT_COLORS[i % SEGMENT_COLORS.len()], *label))
            .collect()
    }
}

impl<Message> canvas::Program<Message> for DoughnutChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
            let outer_radius = bounds.width.min(bounds.height) / 2.0 - 8.0;
            let ring_width = outer_radius * RING_FRACTION;
            let radius = outer_radius - ring_width / 2.0;

            for (i, (start, end)) in segment_angles(&self.shares).into_iter().enumerate() {
                let segment = canvas::Path::new(|b| {
                    b.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                });
                frame.stroke(
                    &segment,
                    canvas::Stroke::default()
                        .with_color(SEGMENT_COLORS[i % SEGMENT_COLORS.len()])
                        .with_width(ring_width),
                );
            }
        });

        vec![geometry]
    }
}
