// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine for the onboarding screen.
//!
//! Transitions are pure functions returning the next state, so the machine
//! can be exercised without rendering. Illegal transitions leave the state
//! unchanged: the login and register forms are only reachable from
//! [`ViewState::Initial`], and never directly from one another.

/// Which of the three mutually exclusive form groups the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Start state and the target of every back action.
    #[default]
    Initial,
    Login,
    Register,
}

impl ViewState {
    /// "Sign in" action. Only valid from `Initial`.
    #[must_use]
    pub fn sign_in(self) -> Self {
        match self {
            ViewState::Initial => ViewState::Login,
            other => other,
        }
    }

    /// "Create account" action. Only valid from `Initial`.
    #[must_use]
    pub fn create_account(self) -> Self {
        match self {
            ViewState::Initial => ViewState::Register,
            other => other,
        }
    }

    /// Back action. Returns to `Initial` from anywhere.
    #[must_use]
    pub fn back(self) -> Self {
        ViewState::Initial
    }

    /// Whether this state presents a form inside the expanded panel.
    #[must_use]
    pub fn shows_form(self) -> bool {
        !matches!(self, ViewState::Initial)
    }
}
