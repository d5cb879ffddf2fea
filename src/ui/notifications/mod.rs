// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are transient, user-facing messages produced by dashboard
//! actions (save, delete, export). Every notification auto-dismisses after a
//! fixed delay and can also be dismissed manually; the two paths are
//! independent and dismissing an already-removed notification is harmless.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
