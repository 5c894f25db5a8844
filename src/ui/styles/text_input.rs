// SPDX-License-Identifier: MPL-2.0
//! Text input style shared by the login and register forms.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Light field on the dark form card, matching the mock-ups.
pub fn field(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => palette::PRIMARY_500,
        text_input::Status::Hovered => palette::TEXT_MUTED,
        _ => Color::TRANSPARENT,
    };

    text_input::Style {
        background: Background::Color(palette::FIELD),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        icon: palette::TEXT_MUTED,
        placeholder: palette::TEXT_MUTED,
        value: palette::FIELD_TEXT,
        selection: palette::PRIMARY_400,
    }
}
