// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Four independent subscriptions are batched by `App::subscription`:
//! a 1 s wall clock, a fast tick that only runs while something needs
//! servicing, the periodic dashboard refresh, and the global keyboard
//! shortcuts.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// 1 s tick for the header clock and the countdown tiles. Always active.
pub fn create_clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::ClockTick)
}

/// Fast tick for toast auto-dismiss and the search debounce.
///
/// Only runs while there is something to service, so an idle dashboard
/// schedules no wakeups.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Periodic "real-time" refresh of stats and activity.
///
/// Suppressed while the simulated initial load is still running.
pub fn create_refresh_subscription(loading: bool, interval_secs: u64) -> Subscription<Message> {
    if loading {
        Subscription::none()
    } else {
        time::every(Duration::from_secs(interval_secs.max(1))).map(|_| Message::Refresh)
    }
}

/// Global keyboard shortcuts: Ctrl/Cmd+S saves the active form,
/// Ctrl/Cmd+E starts the CSV export.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event
        else {
            return None;
        };
        if !modifiers.command() {
            return None;
        }
        match key {
            keyboard::Key::Character(c) if c.as_str() == "s" => Some(Message::SaveShortcut),
            keyboard::Key::Character(c) if c.as_str() == "e" => Some(Message::ExportShortcut),
            _ => None,
        }
    })
}
