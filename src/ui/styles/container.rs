// SPDX-License-Identifier: MPL-2.0
//! Container styles for the screen chrome, panel, cards, and dialog.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-screen background.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}

/// The expandable bottom panel. Only the top corners are rounded.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL)),
        text_color: Some(palette::TEXT),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::LG,
                top_right: radius::LG,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Card wrapping the login/register form fields.
pub fn form_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Circular logo placeholder; the alpha follows the intro fade factor.
pub fn logo(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::FIELD
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dimming layer behind the blocking dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// The dialog card itself.
pub fn dialog_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}
