//! Discrete frame sequences, such as sprite-sheet animations.

use crate::animator::{fire, AnimationCallback, Animator};
use crate::error::AnimationError;
use log::debug;
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// One step of a [`FrameAnimation`]: an opaque `index` (e.g. a sprite id) shown for `duration`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Frame<I = usize> {
    pub duration: Duration,
    pub index: I,
}

impl<I> Frame<I> {
    pub fn new(duration: Duration, index: I) -> Self {
        Self { duration, index }
    }

    /// Creates a frame lasting a whole number of milliseconds.
    pub fn from_millis(milliseconds: u64, index: I) -> Self {
        Self::new(Duration::from_millis(milliseconds), index)
    }
}

/// Steps through an ordered sequence of [`Frame`]s, writing the active frame's index into a
/// caller-owned slot on every update.
///
/// Time that does not fill the current frame is carried over to the next update, so a sequence of
/// short ticks advances frames at exactly the same points as one long tick of the same total
/// length.
///
/// A looping animation wraps back to the first frame and is never done. A non-looping animation
/// stops on the last frame once the total duration has elapsed, fires its callback, and from then
/// on returns the growing overflow past the total duration.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
/// use tickwork_core::animator::Animator;
/// use tickwork_core::frame::FrameAnimation;
///
/// let sprite = Cell::new(0);
/// let mut walk = FrameAnimation::builder()
///     .frame_millis(100, 4)
///     .frame_millis(100, 5)
///     .looping(true)
///     .target(&sprite)
///     .build()
///     .unwrap();
///
/// walk.update(Duration::from_millis(150));
/// assert_eq!(sprite.get(), 5);
/// ```
pub struct FrameAnimation<'a, I: Clone = usize> {
    elapsed: Duration,
    remainder: Duration,
    duration: Duration,
    sequence: Vec<Frame<I>>,
    current: usize,
    looping: bool,
    completed: bool,
    target: Option<&'a Cell<I>>,
    callback: Option<AnimationCallback<'a>>,
}

impl<'a, I: Clone> FrameAnimation<'a, I> {
    /// Creates an animation over `frames`.
    ///
    /// Fails with [`AnimationError::EmptyFrameSequence`] if `frames` is empty, or with
    /// [`AnimationError::ZeroLengthLoop`] if `looping` is set and every frame has zero duration.
    pub fn new(
        frames: impl IntoIterator<Item = Frame<I>>,
        looping: bool,
        target: Option<&'a Cell<I>>,
    ) -> Result<Self, AnimationError> {
        let mut animation = Self {
            elapsed: Duration::ZERO,
            remainder: Duration::ZERO,
            duration: Duration::ZERO,
            sequence: Vec::new(),
            current: 0,
            looping,
            completed: false,
            target,
            callback: None,
        };
        animation.set_frames(frames)?;
        Ok(animation)
    }

    /// Starts a [`FrameAnimationBuilder`].
    pub fn builder() -> FrameAnimationBuilder<'a, I> {
        FrameAnimationBuilder::default()
    }

    /// Replaces the frame sequence and resets the animation.
    ///
    /// On error, the animation is left unchanged.
    pub fn set_frames(
        &mut self,
        frames: impl IntoIterator<Item = Frame<I>>,
    ) -> Result<(), AnimationError> {
        let sequence: Vec<_> = frames.into_iter().collect();
        if sequence.is_empty() {
            return Err(AnimationError::EmptyFrameSequence);
        }
        let duration = sequence.iter().map(|frame| frame.duration).sum::<Duration>();
        if self.looping && duration.is_zero() {
            return Err(AnimationError::ZeroLengthLoop);
        }
        self.sequence = sequence;
        self.duration = duration;
        self.reset();
        Ok(())
    }

    /// Total time fed to this animation since creation or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sum of all frame durations, i.e. the length of one pass through the sequence.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Position of the active frame within the sequence.
    pub fn current_position(&self) -> usize {
        self.current
    }

    /// The active frame.
    pub fn current_frame(&self) -> &Frame<I> {
        &self.sequence[self.current]
    }

    /// Index of the active frame, i.e. the value most recently written to the target slot.
    pub fn current_index(&self) -> &I {
        &self.current_frame().index
    }

    /// Index of the frame `offset` positions after the active one, wrapping around the end of the
    /// sequence regardless of whether the animation loops.
    pub fn offset_frame(&self, offset: usize) -> &I {
        let position = (self.current + offset % self.sequence.len()) % self.sequence.len();
        &self.sequence[position].index
    }

    pub fn frames(&self) -> &[Frame<I>] {
        &self.sequence
    }

    fn is_last(&self) -> bool {
        self.current + 1 == self.sequence.len()
    }

    fn advance_frames(&mut self, mut budget: Duration) -> Duration {
        if self.looping && budget >= self.duration {
            // Every whole cycle lands back on the same frame.
            let cycle = self.duration.as_nanos();
            budget = Duration::from_nanos((budget.as_nanos() % cycle) as u64);
        }
        loop {
            let frame_duration = self.sequence[self.current].duration;
            if budget < frame_duration || (!self.looping && self.is_last()) {
                return budget;
            }
            budget -= frame_duration;
            self.current = (self.current + 1) % self.sequence.len();
        }
    }
}

impl<'a, I: Clone> Animator<'a> for FrameAnimation<'a, I> {
    fn update(&mut self, elapsed: Duration) -> Duration {
        self.elapsed += elapsed;
        self.remainder = self.advance_frames(self.remainder + elapsed);
        if let Some(target) = self.target {
            target.set(self.current_index().clone());
        }
        if !self.is_done() {
            return Duration::ZERO;
        }
        if !self.completed {
            self.completed = true;
            debug!(
                "Frame sequence of {} frames finished after {:?}.",
                self.sequence.len(),
                self.elapsed
            );
            fire(&mut self.callback);
        }
        self.elapsed - self.duration
    }

    fn is_done(&self) -> bool {
        !self.looping && self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.remainder = Duration::ZERO;
        self.current = 0;
        self.completed = false;
    }

    fn set_callback(&mut self, callback: Option<AnimationCallback<'a>>) {
        self.callback = callback;
    }

    fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl<I: Clone + Debug> Debug for FrameAnimation<'_, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameAnimation")
            .field("elapsed", &self.elapsed)
            .field("remainder", &self.remainder)
            .field("duration", &self.duration)
            .field("sequence", &self.sequence)
            .field("current", &self.current)
            .field("looping", &self.looping)
            .field("has_target", &self.target.is_some())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Fluent configuration for a [`FrameAnimation`].
pub struct FrameAnimationBuilder<'a, I = usize> {
    frames: Vec<Frame<I>>,
    looping: bool,
    target: Option<&'a Cell<I>>,
}

impl<I> Default for FrameAnimationBuilder<'_, I> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            looping: false,
            target: None,
        }
    }
}

impl<'a, I: Clone> FrameAnimationBuilder<'a, I> {
    /// Appends a frame showing `index` for `duration`.
    pub fn frame(mut self, duration: Duration, index: I) -> Self {
        self.frames.push(Frame::new(duration, index));
        self
    }

    /// Appends a frame showing `index` for a whole number of milliseconds.
    pub fn frame_millis(self, milliseconds: u64, index: I) -> Self {
        self.frame(Duration::from_millis(milliseconds), index)
    }

    /// Appends several frames at once.
    pub fn frames(mut self, frames: impl IntoIterator<Item = Frame<I>>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Configures whether the sequence wraps back to the first frame. Defaults to `false`.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Configures the slot that receives the active frame's index on every update.
    pub fn target(mut self, target: &'a Cell<I>) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds the animation, consuming the builder. Fails under the same conditions as
    /// [`FrameAnimation::new`].
    pub fn build(self) -> Result<FrameAnimation<'a, I>, AnimationError> {
        FrameAnimation::new(self.frames, self.looping, self.target)
    }
}
