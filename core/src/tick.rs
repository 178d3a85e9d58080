//! Standard tick magnitudes for fixed-rate host loops.
//!
//! These are plain [`Duration`] literals for building bounded, continuous and frame durations in
//! whole ticks; nothing in the animators depends on them.

use std::time::Duration;

/// One tick at 60 Hz (16 666 µs).
pub const STEP_60HZ: Duration = Duration::from_micros(16_666);
/// One tick at 30 Hz, i.e. two 60 Hz ticks.
pub const STEP_30HZ: Duration = Duration::from_micros(2 * 16_666);
/// One tick at 20 Hz (50 ms).
pub const STEP_20HZ: Duration = Duration::from_millis(50);
/// One tick at 15 Hz, i.e. two 30 Hz ticks.
pub const STEP_15HZ: Duration = Duration::from_micros(4 * 16_666);
/// One tick at 10 Hz (100 ms).
pub const STEP_10HZ: Duration = Duration::from_millis(100);
/// One tick at 5 Hz (200 ms).
pub const STEP_5HZ: Duration = Duration::from_millis(200);
