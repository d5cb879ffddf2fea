// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the set of visible notifications. Notifications stack
//! without limit (no dedup, no queue cap, no priority); each one leaves
//! either when its fixed display window elapses or when the user dismisses
//! it, whichever comes first.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// Manages the visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification; it is displayed immediately.
    pub fn push(&mut self, notification: Notification) {
        self.visible.push_front(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an ID that has already been removed (e.g. the auto-dismiss fired
    /// first) returns `false` and is otherwise a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return true;
        }
        false
    }

    /// Removes every notification whose display window has elapsed at `now`.
    ///
    /// Driven by a periodic tick subscription (every 100-500ms).
    pub fn sweep(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired_at(now));
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.sweep(*now);
            }
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notifications are showing.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::DISMISS_AFTER;
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_displays_immediately() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.has_notifications());
    }

    #[test]
    fn notifications_stack_without_limit() {
        let mut manager = Manager::new();
        for i in 0..20 {
            manager.push(Notification::info(format!("toast {i}")));
        }
        assert_eq!(manager.visible_count(), 20);
    }

    #[test]
    fn newest_notification_is_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("older"));
        manager.push(Notification::info("newer"));

        let first = manager.visible().next().expect("has notifications");
        assert_eq!(first.message(), "newer");
    }

    #[test]
    fn dismiss_removes_notification() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_is_safe_noop() {
        let mut manager = Manager::new();
        let stale_id = Notification::success("temp").id();

        assert!(!manager.dismiss(stale_id));
        // And again, to mirror the timer firing after a manual dismissal.
        assert!(!manager.dismiss(stale_id));
    }

    #[test]
    fn sweep_removes_expired_notifications_after_five_seconds() {
        let mut manager = Manager::new();
        manager.push(Notification::success("will expire").backdated(DISMISS_AFTER));
        manager.push(Notification::success("still fresh"));

        manager.sweep(Instant::now());

        assert_eq!(manager.visible_count(), 1);
        let remaining = manager.visible().next().expect("one left");
        assert_eq!(remaining.message(), "still fresh");
    }

    #[test]
    fn sweep_after_manual_dismiss_does_not_panic() {
        let mut manager = Manager::new();
        let notification = Notification::success("short lived").backdated(DISMISS_AFTER);
        let id = notification.id();
        manager.push(notification);

        // User dismisses first; the scheduled sweep then finds nothing.
        assert!(manager.dismiss(id));
        manager.sweep(Instant::now());
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_tick_sweeps() {
        let mut manager = Manager::new();
        manager.push(Notification::error("expired").backdated(DISMISS_AFTER));

        manager.handle_message(&Message::Tick(Instant::now()));
        assert_eq!(manager.visible_count(), 0);
    }

}
