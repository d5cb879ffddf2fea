// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::overview::{self, ExportKind};
use crate::ui::tables::{self, TableKind};
use crate::ui::{forms, notifications, settings, sidebar};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Tables(tables::Message),
    Forms(forms::Message),
    Settings(settings::Message),
    Overview(overview::Message),
    Notification(notifications::NotificationMessage),
    /// The header quick-search field changed.
    SearchInputChanged(String),
    /// The header theme toggle was pressed.
    ToggleTheme,
    /// The simulated initial data load resolved.
    DataLoaded,
    /// Periodic "real-time" refresh of stats and activity.
    Refresh,
    /// 1 s wall-clock tick driving the header clock and countdown.
    ClockTick,
    /// Fast tick while toasts or a pending search need servicing.
    Tick(Instant),
    /// The delete confirmation dialog resolved.
    DeleteConfirmed {
        kind: TableKind,
        id: u32,
        confirmed: bool,
    },
    /// The row-removal fade delay elapsed.
    RowRemovalDue { kind: TableKind, id: u32 },
    /// A simulated export finished.
    ExportFinished(ExportKind),
    /// Ctrl/Cmd+S pressed.
    SaveShortcut,
    /// Ctrl/Cmd+E pressed.
    ExportShortcut,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over the `FESTBOARD_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over the `FESTBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
