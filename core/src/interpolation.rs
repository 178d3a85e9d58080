//! Linear interpolation of the values written by continuous animations.

use num_traits::FromPrimitive;

/// A value that can be blended between two endpoints.
///
/// [`TweenFunction`](crate::continuous::TweenFunction) uses this to turn an eased progress
/// fraction into an output value. `lerp(y0, y1, x)` computes the point at fraction `x` of the way
/// from `y0` to `y1`, so that `x = 0` gives `y0` and `x = 1` gives `y1`.
///
/// Implementations are provided for the primitive numeric types. Integer results are rounded to
/// the nearest whole value.
pub trait Lerp {
    /// Interpolates from `self` toward `y1` by the fraction `x`.
    ///
    /// `x` is usually between `0.0` and `1.0`, but may fall outside that range for overshooting
    /// easings such as [`Easing::OutBack`](crate::easing::Easing::OutBack).
    ///
    /// Integer results that would fall outside the target type, e.g. when an overshooting easing
    /// pushes past an endpoint at `MIN` or `MAX`, saturate at the type's bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwork_core::interpolation::Lerp;
    ///
    /// assert_eq!(10.0f32.lerp(&20.0, 0.25), 12.5);
    /// assert_eq!(0u8.lerp(&200, 0.5), 100);
    /// ```
    fn lerp(&self, y1: &Self, x: f32) -> Self;
}

// Integers blend in f64 as `y0 * (1 - x) + y1 * x` rather than `y0 + x * (y1 - y0)`; the latter
// overflows in the integer domain for ranges like i8::MIN..i8::MAX. 64-bit endpoints near the
// bounds are not exact in f64, so the result is clamped before converting back.
macro_rules! impl_integer_lerp {
    ($($t:ty),*) => {
        $( impl Lerp for $t {
            fn lerp(&self, y1: &Self, x: f32) -> Self {
                let blended = (*self as f64).lerp(&(*y1 as f64), x).round();
                let clamped = blended.clamp(Self::MIN as f64, Self::MAX as f64);
                match Self::from_f64(clamped) {
                    Some(value) => value,
                    None if clamped < 0.0 => Self::MIN,
                    None => Self::MAX,
                }
            }
        }) *
    }
}

impl_integer_lerp! { i8, i16, i32, i64, u8, u16, u32, u64, usize }

impl Lerp for f32 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        self * (1.0 - x) + y1 * x
    }
}

impl Lerp for f64 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        let x = x as f64;
        self * (1.0 - x) + y1 * x
    }
}
