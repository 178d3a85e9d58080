use crate::animator::{AnimationCallback, Animator};
use crate::bounded::BoundedAnimation;
use std::cell::Cell;
use std::time::Duration;

/// Bounded animation that mirrors its elapsed time into a shared cell, so that tests can observe
/// children after handing ownership to a composite.
pub(crate) struct Probe<'a> {
    inner: BoundedAnimation<'a>,
    elapsed: &'a Cell<Duration>,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(duration: Duration, elapsed: &'a Cell<Duration>) -> Self {
        Self {
            inner: BoundedAnimation::new(duration),
            elapsed,
        }
    }
}

impl<'a> Animator<'a> for Probe<'a> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        let remainder = self.inner.update(elapsed);
        self.elapsed.set(self.inner.elapsed());
        remainder
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.elapsed.set(self.inner.elapsed());
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.inner.set_callback(callback);
    }

    fn has_callback(&self) -> bool {
        self.inner.has_callback()
    }
}
