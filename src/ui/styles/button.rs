// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (submit, save).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_ORANGE)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_ORANGE,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_BLUE)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_BLUE,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        },
        _ => disabled()(_theme, status),
    }
}

/// Grayed-out, non-interactive button (e.g. while a save is in flight).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// Selected state for the active sidebar control.
///
/// Uses the brand colors so the active indicator reads consistently across
/// light and dark themes.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_BLUE)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_BLUE,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette::BRAND_ORANGE)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_ORANGE,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..Default::default()
        },
    }
}

/// Quiet button for secondary row actions (view, edit) and nav controls.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(theme.extended_palette().background.weak.color)),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            ..Default::default()
        },
    }
}

/// Destructive row action (delete).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ERROR_500,
        _ => iced::Color {
            a: 0.85,
            ..palette::ERROR_500
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_active_uses_brand_orange() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::BRAND_ORANGE))
        );
    }

    #[test]
    fn disabled_has_muted_text() {
        let style = disabled()(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
