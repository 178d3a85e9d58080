//! Fixed-length timers.

use crate::animator::{fire, AnimationCallback, Animator};
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// A timer that runs for a fixed [`Duration`] and is then permanently done until
/// [`reset`](Animator::reset).
///
/// Bounded animations produce no output of their own; they are typically used as delays inside a
/// [`ChainedAnimation`](crate::chained::ChainedAnimation), or on their own to schedule a callback.
///
/// Once done, every further [`update`](Animator::update) keeps accumulating elapsed time and
/// returns the total overflow past the duration. The callback only fires on the update that
/// crosses the duration.
pub struct BoundedAnimation<'a> {
    elapsed: Duration,
    duration: Duration,
    completed: bool,
    callback: Option<AnimationCallback<'a>>,
}

impl<'a> BoundedAnimation<'a> {
    /// Creates a timer that is done after `duration` has elapsed.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            completed: false,
            callback: None,
        }
    }

    /// Total time fed to this animation since creation or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The duration configured at construction.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<'a> Animator<'a> for BoundedAnimation<'a> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        self.elapsed += elapsed;
        if !self.is_done() {
            return Duration::ZERO;
        }
        if !self.completed {
            self.completed = true;
            fire(&mut self.callback);
        }
        self.elapsed - self.duration
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.completed = false;
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.callback = callback;
    }

    fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl Debug for BoundedAnimation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedAnimation")
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
