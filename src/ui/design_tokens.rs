// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: colors, spacing, sizing, and radii.
//!
//! Tokens are designed to be consistent. Before modifying, check the impact
//! on all panels and maintain the ratios (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.11, 0.10);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.52, 0.50);
    pub const GRAY_200: Color = Color::from_rgb(0.84, 0.82, 0.80);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.90);

    // Brand colors (warm orange scale)
    pub const PRIMARY_100: Color = Color::from_rgb(1.0, 0.93, 0.85);
    pub const PRIMARY_200: Color = Color::from_rgb(0.99, 0.85, 0.70);
    pub const PRIMARY_500: Color = Color::from_rgb(0.92, 0.45, 0.12);
    pub const PRIMARY_600: Color = Color::from_rgb(0.82, 0.38, 0.08);
    pub const PRIMARY_700: Color = Color::from_rgb(0.70, 0.31, 0.06);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Maximum rendered height of the portrait / result previews.
    pub const PREVIEW_MAX_HEIGHT: f32 = 420.0;
    /// Height of the scrolling country list.
    pub const COUNTRY_LIST_HEIGHT: f32 = 260.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 26.0;
    pub const HEADING: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}
