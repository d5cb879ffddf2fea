// SPDX-License-Identifier: MPL-2.0
//! Festival countdown timer and header clock.
//!
//! The countdown targets a fixed future instant (30 days out in the demo)
//! and is re-rendered on the 1 s clock tick. At and after the target the
//! display freezes at zero.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local, Utc};
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Demo lead time for the countdown target.
pub const DEMO_LEAD_DAYS: i64 = 30;

/// Countdown to the festival opening.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    target: DateTime<Utc>,
}

/// Remaining time, broken down the way the tiles display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };
}

impl Countdown {
    /// Countdown to an explicit target instant.
    #[must_use]
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Demo countdown: `days` from the given instant.
    #[must_use]
    pub fn days_from(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            target: now + chrono::Duration::days(days),
        }
    }

    /// Breaks the remaining time down into days/hours/minutes/seconds.
    ///
    /// Returns [`Remaining::ZERO`] at or after the target.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Remaining {
        let delta = self.target.signed_duration_since(now);
        let total_seconds = delta.num_seconds();
        if total_seconds <= 0 {
            return Remaining::ZERO;
        }

        Remaining {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
        }
    }
}

/// Formats the header date/time line (weekday, date, hour:minute).
#[must_use]
pub fn format_header_clock(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y %H:%M").to_string()
}

/// Renders the countdown as four stat tiles.
pub fn view<'a, Msg: 'a>(remaining: Remaining) -> Element<'a, Msg> {
    let tiles = Row::new()
        .spacing(spacing::SM)
        .push(tile(remaining.days, "Days"))
        .push(tile(remaining.hours, "Hours"))
        .push(tile(remaining.minutes, "Minutes"))
        .push(tile(remaining.seconds, "Seconds"));

    Container::new(tiles).into()
}

fn tile<'a, Msg: 'a>(value: i64, label: &'static str) -> Element<'a, Msg> {
    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XXS)
        .push(Text::new(value.to_string()).size(typography::DISPLAY))
        .push(Text::new(label).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fixed(sizing::COUNTDOWN_TILE))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}
