//! Composable, tick-driven animation timers.
//!
//! A host loop feeds elapsed time into an [`Animator`] once per frame. Leaf animators either wait
//! ([`BoundedAnimation`]), evaluate a curve ([`ContinuousAnimation`]) or step through frames
//! ([`FrameAnimation`]); composites run children in sequence ([`ChainedAnimation`]) or in
//! parallel ([`GroupedAnimation`]). Time that an animator does not need is returned from
//! [`Animator::update`] so that whatever runs next can use it.

pub mod prelude;

pub use tickwork_core::{
    animator::{duration_from_secs, AnimationCallback, Animator, BoxedAnimator},
    bounded::BoundedAnimation,
    chained::ChainedAnimation,
    continuous::{
        linear, sine_decay, ContinuousAnimation, ContinuousFunction, Sample, SineDecayFunction,
        TweenFunction,
    },
    easing::{CubicBezierEasing, Easing, EasingFunction},
    error::AnimationError,
    frame::{Frame, FrameAnimation, FrameAnimationBuilder},
    grouped::GroupedAnimation,
    interpolation::Lerp,
    tick,
};
