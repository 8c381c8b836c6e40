// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: base palette and the spacing, sizing,
//! typography, radius, and shadow scales used across the UI.
//!
//! Tokens are designed to stay consistent with each other; the `const` block
//! at the bottom validates the scale ordering at compile time.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_300: Color = Color::from_rgb(0.65, 0.65, 0.65);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.88);

    // Brand colors (violet scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.78, 0.78, 0.95);
    pub const PRIMARY_400: Color = Color::from_rgb(0.56, 0.56, 0.89);
    pub const PRIMARY_500: Color = Color::from_rgb(0.463, 0.463, 0.843);
    pub const PRIMARY_600: Color = Color::from_rgb(0.396, 0.396, 0.831);
    pub const PRIMARY_700: Color = Color::from_rgb(0.31, 0.31, 0.72);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
    /// Rendered edge length of one thumbnail cell in the result grid.
    pub const THUMBNAIL: f32 = 200.0;

    /// Width of the search input, wide enough for long queries.
    pub const SEARCH_INPUT_WIDTH: f32 = 500.0;

    /// Maximum width of the error banner.
    pub const ERROR_BANNER_WIDTH: f32 = 560.0;

    /// Diameter of the loading spinner.
    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Application title.
    pub const TITLE_LG: f32 = 30.0;

    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text, labels, button captions.
    pub const BODY: f32 = 14.0;

    /// Hints, technical error details.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 5.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::MD > radius::SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
