// SPDX-License-Identifier: MPL-2.0
//! UI components for the dashboard.

pub mod charts;
pub mod countdown;
pub mod design_tokens;
pub mod forms;
pub mod notifications;
pub mod overview;
pub mod settings;
pub mod sidebar;
pub mod styles;
pub mod tables;
pub mod theming;
