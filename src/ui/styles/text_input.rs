// SPDX-License-Identifier: MPL-2.0
//! Centralized text input styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// The main search field. Border picks up the brand color on focus.
pub fn search(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let extended = theme.extended_palette();
    let focused = matches!(status, text_input::Status::Focused { .. });

    let border_color = if focused {
        palette::PRIMARY_500
    } else {
        palette::GRAY_500
    };

    text_input::Style {
        background: Background::Color(extended.background.base.color),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::SM.into(),
        },
        icon: extended.background.weak.text,
        placeholder: palette::GRAY_500,
        value: extended.background.base.text,
        selection: Color {
            a: 0.4,
            ..palette::PRIMARY_400
        },
    }
}
