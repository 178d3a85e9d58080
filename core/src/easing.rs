//! Timing curves that reshape the progress of a
//! [`TweenFunction`](crate::continuous::TweenFunction).

use dyn_clone::{clone_trait_object, DynClone};
use lazy_static::lazy_static;
use lyon_geom::{CubicBezierSegment, Point};
use std::fmt::Debug;

/// Maps normalized linear progress to eased progress.
///
/// Both `x` and the result are fractions of the tween, so `calc(0.0)` should be `0.0` and
/// `calc(1.0)` should be `1.0`. Values in between may leave the `0..1` range, e.g. to overshoot.
pub trait EasingFunction: Debug + DynClone {
    /// Computes eased progress for linear progress `x`.
    fn calc(&self, x: f32) -> f32;
}

clone_trait_object!(EasingFunction);

/// A standard or custom [`EasingFunction`].
///
/// The named variants are cubic bezier approximations of the CSS keywords and of the curves
/// published at <https://easings.net>.
#[derive(Clone, Debug, Default)]
pub enum Easing {
    /// Straight-line progress.
    #[default]
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    In,
    /// CSS `ease-out`.
    Out,
    /// CSS `ease-in-out`.
    InOut,
    /// <https://easings.net/#easeInSine>
    InSine,
    /// <https://easings.net/#easeOutSine>
    OutSine,
    /// <https://easings.net/#easeInOutSine>
    InOutSine,
    /// <https://easings.net/#easeInQuad>
    InQuad,
    /// <https://easings.net/#easeOutQuad>
    OutQuad,
    /// <https://easings.net/#easeInOutQuad>
    InOutQuad,
    /// <https://easings.net/#easeInCubic>
    InCubic,
    /// <https://easings.net/#easeOutCubic>
    OutCubic,
    /// <https://easings.net/#easeInOutCubic>
    InOutCubic,
    /// Pulls back below zero before accelerating forward.
    ///
    /// See: <https://easings.net/#easeInBack>
    InBack,
    /// Overshoots past one and settles back.
    ///
    /// See: <https://easings.net/#easeOutBack>
    OutBack,
    /// Any other curve, such as an ad-hoc [`CubicBezierEasing`].
    Custom(Box<dyn EasingFunction>),
}

impl EasingFunction for Easing {
    fn calc(&self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::Ease => EASE.calc(x),
            Self::In => EASE_IN.calc(x),
            Self::Out => EASE_OUT.calc(x),
            Self::InOut => EASE_IN_OUT.calc(x),
            Self::InSine => EASE_IN_SINE.calc(x),
            Self::OutSine => EASE_OUT_SINE.calc(x),
            Self::InOutSine => EASE_IN_OUT_SINE.calc(x),
            Self::InQuad => EASE_IN_QUAD.calc(x),
            Self::OutQuad => EASE_OUT_QUAD.calc(x),
            Self::InOutQuad => EASE_IN_OUT_QUAD.calc(x),
            Self::InCubic => EASE_IN_CUBIC.calc(x),
            Self::OutCubic => EASE_OUT_CUBIC.calc(x),
            Self::InOutCubic => EASE_IN_OUT_CUBIC.calc(x),
            Self::InBack => EASE_IN_BACK.calc(x),
            Self::OutBack => EASE_OUT_BACK.calc(x),
            Self::Custom(custom) => custom.calc(x),
        }
    }
}

lazy_static! {
    static ref EASE: CubicBezierEasing = CubicBezierEasing::new(0.25, 0.1, 0.25, 1.0);
    static ref EASE_IN: CubicBezierEasing = CubicBezierEasing::new(0.42, 0.0, 1.0, 1.0);
    static ref EASE_OUT: CubicBezierEasing = CubicBezierEasing::new(0.0, 0.0, 0.58, 1.0);
    static ref EASE_IN_OUT: CubicBezierEasing = CubicBezierEasing::new(0.42, 0.0, 0.58, 1.0);
    static ref EASE_IN_SINE: CubicBezierEasing = CubicBezierEasing::new(0.12, 0.0, 0.39, 0.0);
    static ref EASE_OUT_SINE: CubicBezierEasing = CubicBezierEasing::new(0.61, 1.0, 0.88, 1.0);
    static ref EASE_IN_OUT_SINE: CubicBezierEasing = CubicBezierEasing::new(0.37, 0.0, 0.63, 1.0);
    static ref EASE_IN_QUAD: CubicBezierEasing = CubicBezierEasing::new(0.11, 0.0, 0.5, 0.0);
    static ref EASE_OUT_QUAD: CubicBezierEasing = CubicBezierEasing::new(0.5, 1.0, 0.89, 1.0);
    static ref EASE_IN_OUT_QUAD: CubicBezierEasing = CubicBezierEasing::new(0.45, 0.0, 0.55, 1.0);
    static ref EASE_IN_CUBIC: CubicBezierEasing = CubicBezierEasing::new(0.32, 0.0, 0.67, 0.0);
    static ref EASE_OUT_CUBIC: CubicBezierEasing = CubicBezierEasing::new(0.33, 1.0, 0.68, 1.0);
    static ref EASE_IN_OUT_CUBIC: CubicBezierEasing = CubicBezierEasing::new(0.65, 0.0, 0.35, 1.0);
    static ref EASE_IN_BACK: CubicBezierEasing = CubicBezierEasing::new(0.36, 0.0, 0.66, -0.56);
    static ref EASE_OUT_BACK: CubicBezierEasing = CubicBezierEasing::new(0.34, 1.56, 0.64, 1.0);
}

/// Easing along a cubic bezier from `(0, 0)` to `(1, 1)` with two free control points.
///
/// Use with [`Easing::Custom`]. Curves can be previewed at <https://cubic-bezier.com/>.
#[derive(Clone, Debug)]
pub struct CubicBezierEasing {
    segment: CubicBezierSegment<f32>,
}

impl CubicBezierEasing {
    /// Creates an easing with control points `(x1, y1)` and `(x2, y2)`.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            segment: CubicBezierSegment {
                from: Point::new(0.0, 0.0),
                ctrl1: Point::new(x1, y1),
                ctrl2: Point::new(x2, y2),
                to: Point::new(1.0, 1.0),
            },
        }
    }
}

impl EasingFunction for CubicBezierEasing {
    fn calc(&self, x: f32) -> f32 {
        // The segment is parameterized by t, not x; solve for the t at which the curve reaches x.
        match self.segment.solve_t_for_x(x).first() {
            Some(&t) => self.segment.y(t),
            None => x,
        }
    }
}
