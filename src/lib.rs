// SPDX-License-Identifier: MPL-2.0
//! `colega` is the desktop onboarding flow for the Colega professional
//! network, built with the Iced GUI framework.
//!
//! It provides an animated three-state entry screen (initial choice, login
//! form, register form) and demonstrates internationalization with Fluent,
//! user preference management, and a pluggable authentication capability.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
