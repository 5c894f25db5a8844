// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes the native events the app cares about. Only window resizes are
/// consumed; they feed the expandable panel's height mapping.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates a frame tick subscription while the panel slide is in flight.
///
/// The animation timeline is sampled in `view`, so ticks only need to
/// trigger redraws; the subscription drops as soon as the timeline settles.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
