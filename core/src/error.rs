//! Construction errors.

use thiserror::Error;

/// Error produced when an animator cannot be built from the arguments it was given.
///
/// Only construction can fail; once built, every animator operation is total.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum AnimationError {
    /// A [`FrameAnimation`](crate::frame::FrameAnimation) was given no frames, so there is no
    /// active frame to report.
    #[error("frame animation requires at least one frame")]
    EmptyFrameSequence,
    /// A looping [`FrameAnimation`](crate::frame::FrameAnimation) was given frames whose durations
    /// sum to zero. Such a loop can never consume time.
    #[error("looping frame animation has zero total duration")]
    ZeroLengthLoop,
}
