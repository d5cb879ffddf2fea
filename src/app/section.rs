// SPDX-License-Identifier: MPL-2.0
//! Dashboard sections.
//!
//! Exactly one section is visible at a time; the active one is tracked as a
//! plain enum value, so the sidebar can never point at a panel that does not
//! exist.

/// A top-level dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Stat cards, recent activity, and the charts row.
    #[default]
    Overview,
    Users,
    Orders,
    Messages,
    Events,
    Settings,
}

impl Section {
    /// All sections, in sidebar order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Users,
        Section::Orders,
        Section::Messages,
        Section::Events,
        Section::Settings,
    ];

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Users => "Users",
            Section::Orders => "Orders",
            Section::Messages => "Messages",
            Section::Events => "Events",
            Section::Settings => "Settings",
        }
    }

    /// Leading glyph shown next to the label.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Section::Overview => "\u{1F4CA}",  // 📊
            Section::Users => "\u{1F465}",     // 👥
            Section::Orders => "\u{1F3AB}",    // 🎫
            Section::Messages => "\u{2709}",   // ✉
            Section::Events => "\u{1F4C5}",    // 📅
            Section::Settings => "\u{2699}",   // ⚙
        }
    }
}
