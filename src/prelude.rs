//! Includes the types commonly used for building animations.

pub use crate::{
    linear, sine_decay, Animator, BoundedAnimation, ChainedAnimation, ContinuousAnimation, Easing,
    Frame, FrameAnimation, GroupedAnimation,
};
