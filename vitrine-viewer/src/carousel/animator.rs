//! Time-based tween driving animated scroll transitions.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Tween from a start offset to a target offset over a fixed duration.
///
/// The tick timestamp comes from the caller (the frame subscription
/// already carries one), so the tween is deterministic under test.
#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(200),
            easing: Easing::EaseOut,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Target offset of the current (or most recent) transition.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin a transition. Restarting while active rebases the tween on
    /// the new start offset; the previous transition is simply dropped.
    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) while animating, or None when
    /// finished/inactive. The final tick lands exactly on the target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current transition immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
