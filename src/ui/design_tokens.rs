// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the dashboard UI.
//!
//! - **Palette**: base colors (the festival brand colors plus a gray scale)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border/Radius/Shadow**: stroke and elevation scales

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (festival identity)
    /// Festival orange (#FF6B35).
    pub const BRAND_ORANGE: Color = Color::from_rgb(1.0, 0.42, 0.208);
    /// Deep festival blue (#004E89).
    pub const BRAND_BLUE: Color = Color::from_rgb(0.0, 0.306, 0.537);
    /// Ink accent (#1A1A2E).
    pub const BRAND_INK: Color = Color::from_rgb(0.102, 0.102, 0.18);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Translucent chart fills (the line chart area fill).
    pub const CHART_FILL: f32 = 0.1;
    /// Surface background for semi-transparent panels and containers.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the sidebar navigation column.
    pub const SIDEBAR_WIDTH: f32 = 200.0;
    /// Fixed width of toast notifications.
    pub const TOAST_WIDTH: f32 = 340.0;
    /// Canvas height for dashboard charts.
    pub const CHART_HEIGHT: f32 = 220.0;
    /// Width of a countdown tile.
    pub const COUNTDOWN_TILE: f32 = 84.0;
    /// Width of the quick-search results dropdown.
    pub const SEARCH_DROPDOWN_WIDTH: f32 = 280.0;
    /// Vertical offset that places overlays just below the header row.
    pub const HEADER_CLEARANCE: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const DISPLAY: f32 = 28.0;
}

// ============================================================================
// Border / Radius / Shadow
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}
