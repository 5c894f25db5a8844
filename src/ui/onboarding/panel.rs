// SPDX-License-Identifier: MPL-2.0
//! Timed interpolation driving the expandable panel and the intro fade.
//!
//! One timeline produces both animated values: the expansion factor grows
//! toward 1 while the fade factor (its complement) shrinks toward 0, so the
//! panel height and the intro opacity always move in lockstep. Progress is a
//! pure function of a supplied [`Instant`], which keeps the arithmetic
//! testable without a real clock; the app only feeds it `Instant::now()`.

use std::time::{Duration, Instant};

/// Panel height when collapsed, in logical pixels.
pub const COLLAPSED_HEIGHT: f32 = 250.0;
/// Gap left above the fully expanded panel.
pub const EXPANDED_TOP_MARGIN: f32 = 100.0;
/// Fixed duration of the expand/collapse slide.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Lifecycle of the timeline at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No animation pending; values rest at the target.
    Idle,
    Animating,
    /// The run reached its target but has not been acknowledged yet.
    Settled,
}

/// Retargetable linear timeline over the expansion factor in `[0, 1]`.
///
/// There is no cancel operation: a new [`retarget`](Self::retarget) captures
/// the current interpolated value as the new starting point, so the last
/// request always wins without a visual jump.
#[derive(Debug, Clone)]
pub struct PanelAnimation {
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for PanelAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelAnimation {
    /// A collapsed, idle timeline (expansion 0, fade 1).
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: SLIDE_DURATION,
        }
    }

    /// Starts driving toward expanded (`true`) or collapsed (`false`).
    ///
    /// Restarts from the currently interpolated value, so retargeting an
    /// in-flight slide reverses it smoothly. Requesting the value the
    /// timeline already rests at is a no-op.
    pub fn retarget(&mut self, expand: bool, now: Instant) {
        let current = self.expansion_at(now);
        let target = if expand { 1.0 } else { 0.0 };
        self.start = current;
        self.target = target;
        self.started_at = if (current - target).abs() < f32::EPSILON {
            None
        } else {
            Some(now)
        };
    }

    /// Expansion factor in `[0, 1]` at `now`.
    #[must_use]
    pub fn expansion_at(&self, now: Instant) -> f32 {
        match self.started_at {
            None => self.target,
            Some(started_at) => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= self.duration {
                    self.target
                } else {
                    let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                    self.start + (self.target - self.start) * t
                }
            }
        }
    }

    /// Fade factor of the intro section: the complement of the expansion.
    #[must_use]
    pub fn fade_at(&self, now: Instant) -> f32 {
        1.0 - self.expansion_at(now)
    }

    /// Where the timeline is in its lifecycle at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        match self.started_at {
            None => Phase::Idle,
            Some(started_at) => {
                if now.saturating_duration_since(started_at) >= self.duration {
                    Phase::Settled
                } else {
                    Phase::Animating
                }
            }
        }
    }

    /// Whether a run is still pending acknowledgment. Drives the frame
    /// subscription: while `true` the app keeps ticking.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Acknowledges a settled run, returning the timeline to `Idle`.
    /// Called from the tick handler; does nothing mid-flight.
    pub fn settle_if_done(&mut self, now: Instant) {
        if self.phase_at(now) == Phase::Settled {
            self.start = self.target;
            self.started_at = None;
        }
    }

    /// Maps the expansion factor onto the panel height for the given window
    /// height: from [`COLLAPSED_HEIGHT`] up to the window height minus
    /// [`EXPANDED_TOP_MARGIN`]. Windows shorter than the collapsed height
    /// pin the panel at [`COLLAPSED_HEIGHT`].
    #[must_use]
    pub fn panel_height(&self, window_height: f32, now: Instant) -> f32 {
        let expanded = (window_height - EXPANDED_TOP_MARGIN).max(COLLAPSED_HEIGHT);
        COLLAPSED_HEIGHT + (expanded - COLLAPSED_HEIGHT) * self.expansion_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn new_timeline_is_idle_and_collapsed() {
        let panel = PanelAnimation::new();
        let now = Instant::now();
        assert_eq!(panel.phase_at(now), Phase::Idle);
        assert_eq!(panel.expansion_at(now), 0.0);
        assert_eq!(panel.fade_at(now), 1.0);
        assert!(!panel.is_running());
    }

    #[test]
    fn expansion_is_monotonic_and_settles_at_target() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);

        let early = panel.expansion_at(at(t0, 75));
        let mid = panel.expansion_at(at(t0, 150));
        let late = panel.expansion_at(at(t0, 225));
        assert!(0.0 < early && early < mid && mid < late && late < 1.0);
        assert_eq!(panel.expansion_at(at(t0, 300)), 1.0);
        assert_eq!(panel.expansion_at(at(t0, 10_000)), 1.0);
    }

    #[test]
    fn fade_moves_in_lockstep_opposite_to_expansion() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);

        for millis in [0, 100, 200, 300] {
            let now = at(t0, millis);
            let sum = panel.expansion_at(now) + panel.fade_at(now);
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn retarget_midflight_starts_from_current_value() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);

        // Reverse halfway up: the collapse must start near 0.5, not snap to 1.
        let halfway = at(t0, 150);
        let progress = panel.expansion_at(halfway);
        panel.retarget(false, halfway);

        assert!((panel.expansion_at(halfway) - progress).abs() < 1e-6);
        assert_eq!(panel.expansion_at(at(t0, 450)), 0.0);
    }

    #[test]
    fn expand_then_immediate_collapse_retargets_cleanly() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);
        panel.retarget(false, t0);
        // Last retarget wins; timeline heads back down.
        assert_eq!(panel.expansion_at(at(t0, 300)), 0.0);
    }

    #[test]
    fn retarget_to_resting_value_is_a_no_op() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(false, t0);
        assert!(!panel.is_running());
        assert_eq!(panel.phase_at(t0), Phase::Idle);
    }

    #[test]
    fn phase_progresses_idle_animating_settled_idle() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        assert_eq!(panel.phase_at(t0), Phase::Idle);

        panel.retarget(true, t0);
        assert_eq!(panel.phase_at(at(t0, 150)), Phase::Animating);
        assert_eq!(panel.phase_at(at(t0, 300)), Phase::Settled);

        panel.settle_if_done(at(t0, 300));
        assert_eq!(panel.phase_at(at(t0, 300)), Phase::Idle);
        assert!(!panel.is_running());
        assert_eq!(panel.expansion_at(at(t0, 300)), 1.0);
    }

    #[test]
    fn settle_if_done_is_ignored_midflight() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);
        panel.settle_if_done(at(t0, 100));
        assert!(panel.is_running());
    }

    #[test]
    fn panel_height_maps_the_documented_range() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        assert_eq!(panel.panel_height(650.0, t0), COLLAPSED_HEIGHT);

        panel.retarget(true, t0);
        let settled = at(t0, 300);
        assert_eq!(panel.panel_height(650.0, settled), 550.0);

        let halfway = panel.panel_height(650.0, at(t0, 150));
        assert!(COLLAPSED_HEIGHT < halfway && halfway < 550.0);
    }

    #[test]
    fn panel_height_never_drops_below_collapsed_on_short_windows() {
        let t0 = Instant::now();
        let mut panel = PanelAnimation::new();
        panel.retarget(true, t0);
        assert_eq!(panel.panel_height(200.0, at(t0, 300)), COLLAPSED_HEIGHT);
    }
}
