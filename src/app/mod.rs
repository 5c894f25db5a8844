// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the onboarding screen, the authentication
//! capability, and localization, and translates screen effects into side
//! effects like route replacement or an authenticate task. Policy decisions
//! (window sizing, which authenticator backs the login form) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::auth::{Authenticator, StaticCredentials};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::onboarding;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging the screens, localization, and the
/// authentication capability.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    onboarding: onboarding::State,
    authenticator: Arc<dyn Authenticator>,
    /// Tracked window height feeding the panel height mapping.
    window_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("view_state", &self.onboarding.view_state())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Onboarding,
            onboarding: onboarding::State::new(),
            authenticator: Arc::new(StaticCredentials),
            window_height: WINDOW_DEFAULT_HEIGHT as f32,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI `Flags` and the persisted
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        // The entry flow ships dark-only, per the product mock-ups.
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.onboarding.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Onboarding(message) => {
                let effect = self.onboarding.handle_message(message, Instant::now());
                self.perform(effect)
            }
            Message::Home(message) => match message {},
            Message::Tick(now) => {
                self.onboarding.tick(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                Task::none()
            }
        }
    }

    /// Runs a side effect requested by the onboarding screen.
    fn perform(&mut self, effect: onboarding::Effect) -> Task<Message> {
        match effect {
            onboarding::Effect::None => Task::none(),
            onboarding::Effect::Authenticate { username, password } => {
                let authenticator = Arc::clone(&self.authenticator);
                Task::perform(
                    async move { authenticator.authenticate(username, password).await },
                    |result| Message::Onboarding(onboarding::Message::LoginCompleted(result)),
                )
            }
            onboarding::Effect::NavigateHome => {
                // Replace semantics: the onboarding state is dropped with
                // the route, so nothing can navigate back into it.
                self.screen = Screen::Home;
                self.onboarding = onboarding::State::new();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Onboarding => self
                .onboarding
                .view(onboarding::ViewEnv {
                    i18n: &self.i18n,
                    window_height: self.window_height,
                    now: Instant::now(),
                })
                .map(Message::Onboarding),
            Screen::Home => home::view(&self.i18n).map(Message::Home),
        }
    }
}
