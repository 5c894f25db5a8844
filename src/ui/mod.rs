// SPDX-License-Identifier: MPL-2.0
//! UI modules: screens, shared widgets, styles, and design tokens.

pub mod design_tokens;
pub mod dialog;
pub mod home;
pub mod onboarding;
pub mod styles;
