// SPDX-License-Identifier: MPL-2.0
//! The animated onboarding screen: initial choice, login form, register form.
//!
//! The screen owns three pieces of transient state — the presentation state
//! machine, the panel/fade timeline, and the form buffers — and reports side
//! effects (authentication, navigation) to the app root as [`Effect`] values
//! instead of performing them itself.

mod panel;
mod view;
mod view_state;

pub use panel::{PanelAnimation, Phase, COLLAPSED_HEIGHT, EXPANDED_TOP_MARGIN, SLIDE_DURATION};
pub use view::ViewEnv;
pub use view_state::ViewState;

use crate::auth::AuthError;
use iced::Element;
use std::time::Instant;

/// Buffers backing the login form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Buffers backing the register form fields.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Messages produced by the onboarding screen's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    CreateAccountPressed,
    SignInPressed,
    BackPressed,
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginSubmitted,
    LoginCompleted(Result<(), AuthError>),
    RegisterEmailChanged(String),
    RegisterNameChanged(String),
    RegisterPasswordChanged(String),
    RegisterSubmitted,
    GooglePressed,
    ErrorDismissed,
}

/// Side effects the app root must perform on the screen's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the authenticator with the submitted pair and report back via
    /// [`Message::LoginCompleted`].
    Authenticate { username: String, password: String },
    /// Replace the current route with the post-login destination.
    NavigateHome,
}

/// Per-screen state. Created on entry, discarded when navigation replaces
/// the route; nothing here outlives the screen.
#[derive(Debug)]
pub struct State {
    view_state: ViewState,
    panel: PanelAnimation,
    login: LoginForm,
    register: RegisterForm,
    /// Guards against a second submit while an authenticate call is in flight.
    submitting: bool,
    /// i18n key of the blocking error dialog, when shown.
    error_dialog: Option<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_state: ViewState::Initial,
            panel: PanelAnimation::new(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            submitting: false,
            error_dialog: None,
        }
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    #[must_use]
    pub fn panel(&self) -> &PanelAnimation {
        &self.panel
    }

    #[must_use]
    pub fn error_dialog_key(&self) -> Option<&'static str> {
        self.error_dialog
    }

    /// Whether the frame subscription should stay alive.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.panel.is_running()
    }

    /// Applies a widget message and returns the effect the app root must run.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::SignInPressed => {
                self.enter(self.view_state.sign_in(), now);
                Effect::None
            }
            Message::CreateAccountPressed => {
                self.enter(self.view_state.create_account(), now);
                Effect::None
            }
            Message::BackPressed => {
                self.enter(self.view_state.back(), now);
                Effect::None
            }
            Message::LoginEmailChanged(value) => {
                self.login.email = value;
                Effect::None
            }
            Message::LoginPasswordChanged(value) => {
                self.login.password = value;
                Effect::None
            }
            Message::LoginSubmitted => {
                if self.submitting {
                    return Effect::None;
                }
                self.submitting = true;
                Effect::Authenticate {
                    username: self.login.email.clone(),
                    password: self.login.password.clone(),
                }
            }
            Message::LoginCompleted(Ok(())) => {
                self.submitting = false;
                Effect::NavigateHome
            }
            Message::LoginCompleted(Err(error)) => {
                self.submitting = false;
                self.error_dialog = Some(error.i18n_key());
                Effect::None
            }
            Message::RegisterEmailChanged(value) => {
                self.register.email = value;
                Effect::None
            }
            Message::RegisterNameChanged(value) => {
                self.register.name = value;
                Effect::None
            }
            Message::RegisterPasswordChanged(value) => {
                self.register.password = value;
                Effect::None
            }
            // Registration is not wired to a backend yet; the button is
            // intentionally inert.
            Message::RegisterSubmitted => Effect::None,
            // The Google button is presentational only.
            Message::GooglePressed => Effect::None,
            Message::ErrorDismissed => {
                self.error_dialog = None;
                Effect::None
            }
        }
    }

    /// Acknowledges a settled slide so the frame subscription can stop.
    pub fn tick(&mut self, now: Instant) {
        self.panel.settle_if_done(now);
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    /// Commits a state-machine transition. Expanding or collapsing the panel
    /// is a side effect of the transition itself, never a separate step, and
    /// returning to the initial state drops any partially entered form data.
    fn enter(&mut self, next: ViewState, now: Instant) {
        if next == self.view_state {
            return;
        }
        self.view_state = next;
        self.panel.retarget(next.shows_form(), now);
        if next == ViewState::Initial {
            self.login = LoginForm::default();
            self.register = RegisterForm::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(state: &mut State, message: Message) -> Effect {
        state.handle_message(message, Instant::now())
    }

    #[test]
    fn sign_in_enters_login_and_expands_the_panel() {
        let mut state = State::new();
        let effect = msg(&mut state, Message::SignInPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.view_state(), ViewState::Login);
        assert!(state.is_animating());
    }

    #[test]
    fn create_account_enters_register_and_expands_the_panel() {
        let mut state = State::new();
        let effect = msg(&mut state, Message::CreateAccountPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.view_state(), ViewState::Register);
        assert!(state.is_animating());
    }

    #[test]
    fn back_returns_to_initial_and_collapses() {
        let t0 = Instant::now();
        let mut state = State::new();
        state.handle_message(Message::SignInPressed, t0);
        state.tick(t0 + SLIDE_DURATION);

        state.handle_message(Message::BackPressed, t0 + SLIDE_DURATION);
        assert_eq!(state.view_state(), ViewState::Initial);
        let settled = t0 + SLIDE_DURATION * 2;
        assert_eq!(state.panel().expansion_at(settled), 0.0);
    }

    #[test]
    fn back_discards_partially_entered_form_data() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::LoginEmailChanged("ana@example.com".into()));
        msg(&mut state, Message::LoginPasswordChanged("secreto".into()));

        msg(&mut state, Message::BackPressed);
        msg(&mut state, Message::SignInPressed);

        assert!(state.login.email.is_empty());
        assert!(state.login.password.is_empty());
    }

    #[test]
    fn forms_are_never_reachable_from_each_other() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::CreateAccountPressed);
        assert_eq!(state.view_state(), ViewState::Login);
    }

    #[test]
    fn login_submit_hands_the_field_values_to_the_authenticator() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::LoginEmailChanged("test".into()));
        msg(&mut state, Message::LoginPasswordChanged("password".into()));

        let effect = msg(&mut state, Message::LoginSubmitted);
        assert_eq!(
            effect,
            Effect::Authenticate {
                username: "test".into(),
                password: "password".into(),
            }
        );
    }

    #[test]
    fn a_second_submit_while_in_flight_is_ignored() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        let first = msg(&mut state, Message::LoginSubmitted);
        let second = msg(&mut state, Message::LoginSubmitted);

        assert!(matches!(first, Effect::Authenticate { .. }));
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn successful_login_navigates_exactly_once_without_a_dialog() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::LoginSubmitted);

        let effect = msg(&mut state, Message::LoginCompleted(Ok(())));
        assert_eq!(effect, Effect::NavigateHome);
        assert!(state.error_dialog_key().is_none());
    }

    #[test]
    fn failed_login_shows_the_dialog_and_stays_put() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::LoginSubmitted);

        let effect = msg(
            &mut state,
            Message::LoginCompleted(Err(AuthError::InvalidCredentials)),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(
            state.error_dialog_key(),
            Some("error-auth-invalid-credentials")
        );
        // The failed attempt releases the guard for a retry.
        assert!(matches!(
            msg(&mut state, Message::LoginSubmitted),
            Effect::Authenticate { .. }
        ));
    }

    #[test]
    fn dismissing_the_dialog_clears_it() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        msg(&mut state, Message::LoginSubmitted);
        msg(
            &mut state,
            Message::LoginCompleted(Err(AuthError::InvalidCredentials)),
        );

        msg(&mut state, Message::ErrorDismissed);
        assert!(state.error_dialog_key().is_none());
    }

    #[test]
    fn register_submit_is_a_no_op() {
        let mut state = State::new();
        msg(&mut state, Message::CreateAccountPressed);
        msg(&mut state, Message::RegisterEmailChanged("ana@example.com".into()));
        msg(&mut state, Message::RegisterNameChanged("Ana".into()));
        msg(&mut state, Message::RegisterPasswordChanged("secreto".into()));

        let effect = msg(&mut state, Message::RegisterSubmitted);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.view_state(), ViewState::Register);
        assert!(state.error_dialog_key().is_none());
    }

    #[test]
    fn google_button_is_a_no_op() {
        let mut state = State::new();
        msg(&mut state, Message::SignInPressed);
        assert_eq!(msg(&mut state, Message::GooglePressed), Effect::None);
    }

    #[test]
    fn tick_stops_the_frame_subscription_once_settled() {
        let t0 = Instant::now();
        let mut state = State::new();
        state.handle_message(Message::SignInPressed, t0);
        assert!(state.is_animating());

        state.tick(t0 + SLIDE_DURATION / 2);
        assert!(state.is_animating());

        state.tick(t0 + SLIDE_DURATION);
        assert!(!state.is_animating());
    }
}
