// SPDX-License-Identifier: MPL-2.0
//! Authentication capability consumed by the onboarding screen.
//!
//! The screen never inspects credentials itself; it hands them to an
//! [`Authenticator`] and reacts to the outcome. This keeps credential policy
//! out of the UI layer and lets tests substitute a fake implementation.

use futures_util::future::BoxFuture;
use std::fmt;

/// Specific error types for failed sign-in attempts.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The username/password pair was rejected.
    InvalidCredentials,

    /// The authentication service could not be reached.
    Unavailable(String),

    /// Too many attempts in a short window.
    RateLimited,
}

impl AuthError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "error-auth-invalid-credentials",
            AuthError::Unavailable(_) => "error-auth-unavailable",
            AuthError::RateLimited => "error-auth-rate-limited",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::Unavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AuthError::RateLimited => write!(f, "Too many attempts"),
        }
    }
}

/// A single asynchronous sign-in operation.
///
/// Implementations own credential verification end to end; the caller only
/// learns success or a categorized [`AuthError`].
pub trait Authenticator: fmt::Debug + Send + Sync {
    fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, Result<(), AuthError>>;
}

/// Placeholder verifier that accepts one fixed username/password pair.
///
/// This stands in for a real backend during development and is not a
/// security boundary: no storage, no lockout, no backoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredentials;

const EXPECTED_USERNAME: &str = "test";
const EXPECTED_PASSWORD: &str = "password";

impl Authenticator for StaticCredentials {
    fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, Result<(), AuthError>> {
        Box::pin(async move {
            if username == EXPECTED_USERNAME && password == EXPECTED_PASSWORD {
                Ok(())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        })
    }
}
