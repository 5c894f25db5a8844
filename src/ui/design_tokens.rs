// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the onboarding flow.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid, plus the panel insets)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Screen background.
    pub const BACKGROUND: Color = Color::from_rgb(0.118, 0.118, 0.118);
    /// Form card background, one step above the screen background.
    pub const SURFACE: Color = Color::from_rgb(0.180, 0.180, 0.180);
    /// Expandable bottom panel background.
    pub const PANEL: Color = Color::from_rgb(0.2, 0.2, 0.2);

    pub const TEXT: Color = WHITE;
    pub const TEXT_MUTED: Color = Color::from_rgb(0.502, 0.502, 0.502);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.286, 0.671, 0.910);
    pub const PRIMARY_500: Color = Color::from_rgb(0.204, 0.596, 0.859);
    pub const PRIMARY_600: Color = Color::from_rgb(0.161, 0.502, 0.725);

    /// Input field and logo placeholder fill.
    pub const FIELD: Color = Color::from_rgb(0.827, 0.827, 0.827);
    /// Text drawn on top of [`FIELD`].
    pub const FIELD_TEXT: Color = Color::from_rgb(0.1, 0.1, 0.1);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimming layer behind a blocking dialog.
    pub const BACKDROP: f32 = 0.5;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    /// Horizontal inset of the expandable panel content.
    pub const PANEL: f32 = 20.0;
    pub const LG: f32 = 24.0;
    /// Inner padding of form cards.
    pub const FORM: f32 = 30.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of the circular logo placeholder.
    pub const LOGO: f32 = 150.0;
    /// Vertical padding inside primary buttons.
    pub const BUTTON_PADDING_Y: f32 = 15.0;
    /// Horizontal padding inside primary buttons.
    pub const BUTTON_PADDING_X: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 28.0;
    pub const INTRO: f32 = 24.0;
    pub const BUTTON: f32 = 18.0;
    pub const INPUT: f32 = 16.0;
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Buttons, input fields, and form cards.
    pub const SM: f32 = 10.0;
    /// Top corners of the expandable panel.
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill / circle shape
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
