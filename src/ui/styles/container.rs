// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of the error banner: neutral background with an error accent
/// border so the banner reads as urgent without shouting.
pub fn error_banner(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Placeholder cell shown when a thumbnail failed to download.
pub fn placeholder_cell(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let bg_color = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_500
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::GRAY_500),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_banner_border_uses_error_color() {
        let style = error_banner(&Theme::Light);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn placeholder_surface_follows_theme() {
        let light = placeholder_cell(&Theme::Light);
        let dark = placeholder_cell(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
