// SPDX-License-Identifier: MPL-2.0
//! Post-login destination screen.
//!
//! The product's feed lives beyond the scope of this flow; this screen is
//! the fixed landing point a successful sign-in replaces the route with.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let greeting = Text::new(i18n.tr("home-title")).size(typography::TITLE);
    let caption = Text::new(i18n.tr("home-caption"))
        .size(typography::CAPTION)
        .color(palette::TEXT_MUTED);

    Container::new(
        Column::new()
            .push(greeting)
            .push(caption)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::screen)
    .into()
}
