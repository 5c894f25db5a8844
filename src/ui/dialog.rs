// SPDX-License-Identifier: MPL-2.0
//! Blocking modal dialog.
//!
//! Stacks a dimming backdrop and a centered card over the given base view.
//! The backdrop swallows all input, so the only way out is the dismiss
//! button.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{button, center, opaque, stack, text, Column, Container};
use iced::{Element, Font, Length};

pub fn blocking<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    title: String,
    body: String,
    dismiss_label: String,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let dismiss = button(text(dismiss_label).size(typography::INPUT))
        .style(styles::button::primary)
        .padding([spacing::XS, spacing::LG])
        .on_press(on_dismiss);

    let card = Container::new(
        Column::new()
            .push(
                text(title)
                    .size(typography::BUTTON)
                    .color(palette::ERROR_500)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(text(body).size(typography::INPUT))
            .push(
                Container::new(dismiss)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right),
            )
            .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .max_width(360.0)
    .style(styles::container::dialog_card);

    stack([
        base,
        opaque(center(opaque(card)).style(styles::container::backdrop)),
    ])
    .into()
}
