//! Animations whose output is a function of cumulative elapsed time.

use crate::animator::{fire, AnimationCallback, Animator};
use crate::easing::{Easing, EasingFunction};
use crate::interpolation::Lerp;
use std::cell::Cell;
use std::f32::consts::PI;
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// The result of evaluating a [`ContinuousFunction`] at some elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<V> {
    /// Output value at the evaluated time.
    pub value: V,
    /// Whether the curve has ended at the evaluated time.
    pub done: bool,
    /// How far past the end of the curve the evaluated time is; zero while not done.
    pub remainder: Duration,
}

/// A curve evaluated by a [`ContinuousAnimation`].
///
/// Functions are pure: the animation keeps track of elapsed time and always passes the cumulative
/// total, never the per-tick delta. Any `Fn(Duration) -> Sample<V>` closure is a
/// `ContinuousFunction`.
pub trait ContinuousFunction<V> {
    /// Evaluates the curve at `elapsed` time since the animation started.
    fn sample(&self, elapsed: Duration) -> Sample<V>;
}

impl<V, F> ContinuousFunction<V> for F
where
    F: Fn(Duration) -> Sample<V>,
{
    fn sample(&self, elapsed: Duration) -> Sample<V> {
        self(elapsed)
    }
}

/// Drives a [`ContinuousFunction`] and writes each sampled value into a caller-owned slot.
///
/// The slot is borrowed rather than owned; the caller reads it between updates. An animation with
/// no slot still tracks the most recent value, available from [`value`](Self::value).
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
/// use tickwork_core::animator::Animator;
/// use tickwork_core::continuous::{linear, ContinuousAnimation};
///
/// let opacity = Cell::new(0.0f32);
/// let tween = linear(Duration::from_secs(2), 0.0, 1.0);
/// let mut fade = ContinuousAnimation::new(tween, Some(&opacity));
///
/// fade.update(Duration::from_secs(1));
/// assert_eq!(opacity.get(), 0.5);
/// ```
pub struct ContinuousAnimation<'a, V = f32> {
    elapsed: Duration,
    function: Box<dyn ContinuousFunction<V> + 'a>,
    target: Option<&'a Cell<V>>,
    value: Option<V>,
    done: bool,
    completed: bool,
    callback: Option<AnimationCallback<'a>>,
}

impl<'a, V: Clone> ContinuousAnimation<'a, V> {
    /// Creates an animation over `function` that writes to `target` on every update, if a target
    /// is given.
    pub fn new(function: impl ContinuousFunction<V> + 'a, target: Option<&'a Cell<V>>) -> Self {
        Self {
            elapsed: Duration::ZERO,
            function: Box::new(function),
            target,
            value: None,
            done: false,
            completed: false,
            callback: None,
        }
    }

    /// Total time fed to this animation since creation or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The value produced by the most recent update, or `None` if there has been no update since
    /// creation or the last reset.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

impl<'a, V: Clone> Animator<'a> for ContinuousAnimation<'a, V> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        self.elapsed += elapsed;
        let Sample {
            value,
            done,
            remainder,
        } = self.function.sample(self.elapsed);
        if let Some(target) = self.target {
            target.set(value.clone());
        }
        self.value = Some(value);
        self.done = done;
        if self.done && !self.completed {
            self.completed = true;
            fire(&mut self.callback);
        }
        remainder
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.value = None;
        self.done = false;
        self.completed = false;
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.callback = callback;
    }

    fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl<V: Debug> Debug for ContinuousAnimation<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousAnimation")
            .field("elapsed", &self.elapsed)
            .field("value", &self.value)
            .field("done", &self.done)
            .field("has_target", &self.target.is_some())
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

/// Interpolates between two values over a fixed duration, optionally along an [`Easing`] curve.
///
/// Progress is `min(elapsed, duration) / duration`, so the value holds at `to` once the duration
/// has passed. A zero duration jumps straight to `to`.
#[derive(Clone, Debug)]
pub struct TweenFunction<V> {
    duration: Duration,
    from: V,
    to: V,
    easing: Easing,
}

impl<V: Lerp> TweenFunction<V> {
    /// Creates a straight-line tween from `from` to `to`.
    pub fn linear(duration: Duration, from: V, to: V) -> Self {
        Self {
            duration,
            from,
            to,
            easing: Easing::Linear,
        }
    }

    /// Replaces the easing applied to the tween's progress.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let total = self.duration.as_secs_f64();
        (elapsed.as_secs_f64().min(total) / total) as f32
    }
}

impl<V: Lerp> ContinuousFunction<V> for TweenFunction<V> {
    fn sample(&self, elapsed: Duration) -> Sample<V> {
        let x = self.easing.calc(self.progress(elapsed));
        Sample {
            value: self.from.lerp(&self.to, x),
            done: elapsed >= self.duration,
            remainder: elapsed.saturating_sub(self.duration),
        }
    }
}

/// Creates a straight-line [`TweenFunction`] from `from` to `to` over `duration`.
pub fn linear<V: Lerp>(duration: Duration, from: V, to: V) -> TweenFunction<V> {
    TweenFunction::linear(duration, from, to)
}

/// A sine wave whose amplitude decays linearly over a fixed duration, e.g. for shakes and wobbles.
///
/// While running, the value is
/// `amplitude * sin(elapsed * 2π * frequency / duration) * (1 - decay * elapsed / duration)`, so
/// `frequency` counts full oscillations over the whole duration and `decay` of `1.0` fades all
/// the way to zero. At and after the duration the value is exactly `0.0`.
#[derive(Clone, Debug)]
pub struct SineDecayFunction {
    duration: Duration,
    amplitude: f32,
    frequency: f32,
    decay: f32,
}

impl SineDecayFunction {
    pub fn new(duration: Duration, amplitude: f32, frequency: f32, decay: f32) -> Self {
        Self {
            duration,
            amplitude,
            frequency,
            decay,
        }
    }
}

impl ContinuousFunction<f32> for SineDecayFunction {
    fn sample(&self, elapsed: Duration) -> Sample<f32> {
        let done = elapsed >= self.duration;
        let value = if done {
            0.0
        } else {
            let interval = (self.frequency * 2.0 * PI) as f64;
            let phase = elapsed.as_secs_f64() * interval / self.duration.as_secs_f64();
            let fraction = elapsed.as_nanos() as f32 / self.duration.as_nanos() as f32;
            phase.sin() as f32 * self.amplitude * (1.0 - fraction * self.decay)
        };
        Sample {
            value,
            done,
            remainder: elapsed.saturating_sub(self.duration),
        }
    }
}

/// Creates a [`SineDecayFunction`].
pub fn sine_decay(
    duration: Duration,
    amplitude: f32,
    frequency: f32,
    decay: f32,
) -> SineDecayFunction {
    SineDecayFunction::new(duration, amplitude, frequency, decay)
}
