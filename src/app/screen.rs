// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
///
/// A successful sign-in *replaces* `Onboarding` with `Home`: the onboarding
/// state is dropped together with the route, so nothing navigates back
/// across this edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Home,
}
