//! The [`Animator`] contract shared by every timer, curve, frame sequence and composition.

use log::warn;
use std::time::Duration;

/// Completion callback armed on an [`Animator`] through [`Animator::set_callback`].
///
/// Callbacks are invoked synchronously from inside [`Animator::update`], at most once per
/// transition from running to done.
pub type AnimationCallback<'a> = Box<dyn FnMut() + 'a>;

/// An owned, type-erased [`Animator`], as held by
/// [`ChainedAnimation`](crate::chained::ChainedAnimation) and
/// [`GroupedAnimation`](crate::grouped::GroupedAnimation).
pub type BoxedAnimator<'a> = Box<dyn Animator<'a> + 'a>;

/// A timer driven by externally supplied elapsed time.
///
/// The host loop calls [`update`](Self::update) on the outermost animator once per frame.
/// Composites forward the tick to their children, and leaves accumulate it into their own elapsed
/// time. Every implementation follows the same remainder protocol: the value returned from
/// `update` is the portion of the tick that the animator did _not_ need, which is always zero
/// while the animator is still running and may be non-zero once it is done.
///
/// The `'a` lifetime bounds anything the animator borrows from its caller, i.e. completion
/// callbacks and output slots.
pub trait Animator<'a> {
    /// Advances the animator by `elapsed` and returns the unused remainder.
    ///
    /// An update of [`Duration::ZERO`] is legal and has no effect on timing, although animators
    /// with output slots will still write their current value.
    fn update(&mut self, elapsed: Duration) -> Duration;

    /// Whether or not the animator has run to completion. Looping animators are never done.
    fn is_done(&self) -> bool;

    /// Returns the animator, and any animators it owns, to the initial state.
    ///
    /// The armed callback (if any) is left in place. Calling `reset` more than once has the same
    /// effect as calling it once.
    fn reset(&mut self);

    /// Releases any child animators owned by this one.
    ///
    /// Leaf animators own nothing, so the default implementation does nothing. Composites drop
    /// their children and afterward behave as an empty, always-done shell.
    fn delete(&mut self) {}

    /// Arms `callback` to be invoked when the animator finishes, replacing whatever callback was
    /// armed before. The outgoing callback is dropped without being invoked. Passing `None`
    /// disarms the animator.
    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>);

    /// Whether or not a completion callback is currently armed.
    fn has_callback(&self) -> bool;

    /// Same as [`update`](Self::update), but takes the tick as floating-point seconds.
    ///
    /// Negative, `NaN` and infinite values are clamped to zero rather than propagated into the
    /// remainder arithmetic.
    fn update_secs(&mut self, elapsed_seconds: f32) -> Duration {
        self.update(duration_from_secs(elapsed_seconds))
    }

    /// Fluent form of [`set_callback`](Self::set_callback), for use while building an animator.
    fn with_callback(mut self, callback: impl FnMut() + 'a) -> Self
    where
        Self: Sized,
    {
        self.set_callback(Some(Box::new(callback)));
        self
    }
}

/// Converts a floating-point number of seconds to a [`Duration`], clamping anything that cannot be
/// represented (negative, `NaN`, infinite or too large) to zero.
pub fn duration_from_secs(seconds: f32) -> Duration {
    match Duration::try_from_secs_f32(seconds) {
        Ok(duration) => duration,
        Err(_) => {
            warn!("Clamping unrepresentable tick of {seconds} seconds to zero.");
            Duration::ZERO
        }
    }
}

/// Invokes the armed callback, if there is one.
pub(crate) fn fire(callback: &mut Option<AnimationCallback<'_>>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounded::BoundedAnimation;
    use std::cell::Cell;

    #[test]
    fn duration_from_secs_converts_positive_values() {
        assert_eq!(duration_from_secs(0.25), Duration::from_millis(250));
        assert_eq!(duration_from_secs(0.0), Duration::ZERO);
    }

    #[test]
    fn duration_from_secs_clamps_invalid_values() {
        assert_eq!(duration_from_secs(-1.0), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::NAN), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::INFINITY), Duration::ZERO);
    }

    #[test]
    fn update_secs_ignores_negative_ticks() {
        let mut animation = BoundedAnimation::new(Duration::from_secs(1));

        assert_eq!(animation.update_secs(0.5), Duration::ZERO);
        assert_eq!(animation.update_secs(-3.0), Duration::ZERO);
        assert_eq!(animation.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn set_callback_replaces_without_invoking() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let mut animation = BoundedAnimation::new(Duration::from_secs(1))
            .with_callback(|| first.set(first.get() + 1));

        animation.set_callback(Some(Box::new(|| second.set(second.get() + 1))));
        animation.update(Duration::from_secs(1));

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn set_callback_none_disarms() {
        let fired = Cell::new(false);
        let mut animation =
            BoundedAnimation::new(Duration::from_secs(1)).with_callback(|| fired.set(true));

        assert!(animation.has_callback());
        animation.set_callback(None);
        assert!(!animation.has_callback());
        animation.update(Duration::from_secs(2));

        assert!(!fired.get());
    }

    #[test]
    fn boxed_animators_are_object_safe() {
        let mut animators: Vec<BoxedAnimator> = vec![
            Box::new(BoundedAnimation::new(Duration::from_secs(1))),
            Box::new(BoundedAnimation::new(Duration::from_secs(2))),
        ];

        let remainders: Vec<_> = animators
            .iter_mut()
            .map(|a| a.update(Duration::from_millis(1500)))
            .collect();

        assert_eq!(remainders, [Duration::from_millis(500), Duration::ZERO]);
    }
}
