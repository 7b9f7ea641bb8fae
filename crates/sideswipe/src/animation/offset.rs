//! Time-based animation of a scalar offset.
//!
//! [`OffsetAnimation`] drives the row's horizontal offset toward a settle
//! target after a drag ends. The host's frame loop calls
//! [`OffsetAnimation::update`] once per frame and applies the returned value.

use std::time::{Duration, Instant};

use super::easing::{Easing, lerp_eased};

/// Default settle duration.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(250);

/// A one-shot animation interpolating a scalar from a start value to a
/// target.
#[derive(Debug, Clone)]
pub struct OffsetAnimation {
    easing: Easing,
    duration: Duration,
    start_value: f32,
    target: f32,
    start_time: Option<Instant>,
    running: bool,
}

impl OffsetAnimation {
    /// Create an animation with the default duration and curve.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseOutCubic,
            duration: DEFAULT_SETTLE_DURATION,
            start_value: 0.0,
            target: 0.0,
            start_time: None,
            running: false,
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing function.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Get the animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the animation duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Check if the animation is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The value the animation is heading toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start animating from `from` to `to`.
    ///
    /// Returns `true` if the animation was started, `false` if the values are
    /// already equal and no animation is needed.
    pub fn start(&mut self, from: f32, to: f32) -> bool {
        if from == to {
            self.running = false;
            self.start_time = None;
            self.target = to;
            return false;
        }
        self.start_value = from;
        self.target = to;
        self.start_time = Some(Instant::now());
        self.running = true;
        true
    }

    /// Advance the animation and return the current value.
    ///
    /// Returns `None` when no animation is running. Once the duration has
    /// elapsed the animation stops and the final call returns the exact
    /// target value.
    pub fn update(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        let start_time = self.start_time?;

        let elapsed = start_time.elapsed();
        if self.duration.is_zero() || elapsed >= self.duration {
            self.running = false;
            self.start_time = None;
            return Some(self.target);
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some(lerp_eased(self.easing, self.start_value, self.target, t))
    }

    /// Jump to the target and stop. Returns the target value if an animation
    /// was in progress.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.start_time = None;
        Some(self.target)
    }

    /// Stop without reaching the target.
    pub fn stop(&mut self) {
        self.running = false;
        self.start_time = None;
    }
}

impl Default for OffsetAnimation {
    fn default() -> Self {
        Self::new()
    }
}
