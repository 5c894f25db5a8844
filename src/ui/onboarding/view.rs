// SPDX-License-Identifier: MPL-2.0
//! View rendering for the onboarding screen.
//!
//! Layout mirrors the mock-ups: an optional contextual header, a fading
//! intro section (logo + tagline), and the expandable bottom panel whose
//! content is a pure switch on the presentation state.

use super::{Message, State, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{dialog, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Space};
use iced::{Color, Element, Length, Padding};
use std::time::Instant;

/// Context required to render the onboarding screen.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Current window height; the expanded panel stops one margin short of it.
    pub window_height: f32,
    /// Render instant used to sample the animation timeline.
    pub now: Instant,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let fade = state.panel.fade_at(env.now);
    let panel_height = state.panel.panel_height(env.window_height, env.now);

    let mut layout = Column::new().width(Length::Fill).height(Length::Fill);
    if state.view_state.shows_form() {
        layout = layout.push(header(state.view_state, env.i18n));
    }
    layout = layout
        .push(intro(env.i18n, fade))
        .push(panel(state, env.i18n, panel_height));

    let screen: Element<'_, Message> = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into();

    match state.error_dialog {
        Some(key) => dialog::blocking(
            screen,
            env.i18n.tr("dialog-error-title"),
            env.i18n.tr(key),
            env.i18n.tr("dialog-dismiss"),
            Message::ErrorDismissed,
        ),
        None => screen,
    }
}

/// Back arrow plus the contextual title block, shown only over the forms.
fn header<'a>(view_state: ViewState, i18n: &'a I18n) -> Element<'a, Message> {
    let back = button(text("←").size(typography::TITLE))
        .style(styles::button::plain)
        .padding(spacing::XS)
        .on_press(Message::BackPressed);

    let title: Element<'_, Message> = match view_state {
        ViewState::Register => text(i18n.tr("register-title"))
            .size(typography::TITLE)
            .into(),
        _ => Row::new()
            .spacing(spacing::XS)
            .push(text(i18n.tr("login-welcome")).size(typography::TITLE))
            .push(
                text(i18n.tr("brand-name"))
                    .size(typography::TITLE)
                    .color(palette::PRIMARY_500),
            )
            .into(),
    };

    let subtext_key = match view_state {
        ViewState::Register => "register-subtext",
        _ => "login-subtext",
    };

    Column::new()
        .push(back)
        .push(Space::new().height(spacing::XL))
        .push(title)
        .push(
            text(i18n.tr(subtext_key))
                .size(typography::CAPTION)
                .color(palette::TEXT_MUTED),
        )
        .spacing(spacing::XXS)
        .padding(spacing::PANEL)
        .width(Length::Fill)
        .into()
}

/// Logo placeholder and tagline; its opacity follows the fade factor.
fn intro<'a>(i18n: &'a I18n, fade: f32) -> Element<'a, Message> {
    let logo = Container::new(Space::new())
        .width(sizing::LOGO)
        .height(sizing::LOGO)
        .style(styles::container::logo(fade));

    let tagline = text(i18n.tr("intro-title"))
        .size(typography::INTRO)
        .color(Color {
            a: fade,
            ..palette::TEXT
        })
        .align_x(Horizontal::Center);

    Container::new(
        Column::new()
            .push(logo)
            .push(tagline)
            .spacing(spacing::PANEL)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding {
        top: 0.0,
        right: spacing::PANEL,
        bottom: 0.0,
        left: spacing::PANEL,
    })
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

/// The expandable bottom panel; its height is driven by the timeline.
fn panel<'a>(state: &'a State, i18n: &'a I18n, height: f32) -> Element<'a, Message> {
    let content: Element<'_, Message> = match state.view_state {
        ViewState::Initial => initial_buttons(i18n),
        ViewState::Login => login_form(state, i18n),
        ViewState::Register => register_form(state, i18n),
    };

    let padded = Container::new(content).padding(Padding {
        top: spacing::FORM,
        right: spacing::PANEL,
        bottom: spacing::PANEL,
        left: spacing::PANEL,
    });

    Container::new(scrollable(padded).width(Length::Fill))
        .width(Length::Fill)
        .height(height)
        .style(styles::container::panel)
        .into()
}

fn initial_buttons<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    Column::new()
        .push(action_button(
            i18n.tr("initial-create-account"),
            styles::button::primary,
            Message::CreateAccountPressed,
        ))
        .push(action_button(
            i18n.tr("initial-sign-in"),
            styles::button::secondary,
            Message::SignInPressed,
        ))
        .spacing(spacing::PANEL)
        .width(Length::Fill)
        .into()
}

fn login_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let email = text_input(&i18n.tr("field-email-placeholder"), &state.login.email)
        .on_input(Message::LoginEmailChanged)
        .style(styles::text_input::field)
        .padding(spacing::SM)
        .size(typography::INPUT);

    let password = text_input(
        &i18n.tr("field-password-placeholder"),
        &state.login.password,
    )
    .secure(true)
    .on_input(Message::LoginPasswordChanged)
    .on_submit(Message::LoginSubmitted)
    .style(styles::text_input::field)
    .padding(spacing::SM)
    .size(typography::INPUT);

    let forgot = Container::new(
        text(i18n.tr("login-forgot-password"))
            .size(typography::CAPTION)
            .color(palette::PRIMARY_500),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    let form = Column::new()
        .push(field_label(i18n, "field-email-label"))
        .push(email)
        .push(field_label(i18n, "field-password-label"))
        .push(password)
        .push(forgot)
        .push(action_button(
            i18n.tr("login-submit"),
            styles::button::primary,
            Message::LoginSubmitted,
        ))
        .push(google_caption(i18n, "login-google-caption"))
        .push(google_button(i18n))
        .spacing(spacing::SM)
        .width(Length::Fill);

    form_card(form)
}

fn register_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let email = text_input(&i18n.tr("field-email-placeholder"), &state.register.email)
        .on_input(Message::RegisterEmailChanged)
        .style(styles::text_input::field)
        .padding(spacing::SM)
        .size(typography::INPUT);

    let name = text_input(&i18n.tr("field-name-placeholder"), &state.register.name)
        .on_input(Message::RegisterNameChanged)
        .style(styles::text_input::field)
        .padding(spacing::SM)
        .size(typography::INPUT);

    let password = text_input(
        &i18n.tr("field-password-placeholder"),
        &state.register.password,
    )
    .secure(true)
    .on_input(Message::RegisterPasswordChanged)
    .style(styles::text_input::field)
    .padding(spacing::SM)
    .size(typography::INPUT);

    let form = Column::new()
        .push(field_label(i18n, "field-email-label"))
        .push(email)
        .push(field_label(i18n, "field-name-label"))
        .push(name)
        .push(field_label(i18n, "field-password-label"))
        .push(password)
        .push(action_button(
            i18n.tr("register-submit"),
            styles::button::primary,
            Message::RegisterSubmitted,
        ))
        .push(google_caption(i18n, "register-google-caption"))
        .push(google_button(i18n))
        .spacing(spacing::SM)
        .width(Length::Fill);

    form_card(form)
}

fn form_card(form: Column<'_, Message>) -> Element<'_, Message> {
    Container::new(form)
        .padding(spacing::FORM)
        .width(Length::Fill)
        .style(styles::container::form_card)
        .into()
}

fn field_label<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    text(i18n.tr(key)).size(typography::CAPTION).into()
}

fn action_button<'a>(
    label: String,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'a,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        text(label)
            .size(typography::BUTTON)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .style(style)
    .padding([sizing::BUTTON_PADDING_Y, sizing::BUTTON_PADDING_X])
    .width(Length::Fill)
    .on_press(on_press)
    .into()
}

fn google_caption<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    text(i18n.tr(key))
        .size(typography::CAPTION)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn google_button<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text("G")
                .size(typography::INPUT)
                .color(palette::PRIMARY_500),
        )
        .push(text(i18n.tr("google-button")).size(typography::INPUT));

    button(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .style(styles::button::google)
    .padding([spacing::SM, sizing::BUTTON_PADDING_X])
    .width(Length::Fill)
    .on_press(Message::GooglePressed)
    .into()
}
