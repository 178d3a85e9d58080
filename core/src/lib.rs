//! Core types for tickwork.
//!
//! All important types are re-exported by the `tickwork` crate, which should normally be used
//! instead of depending on this crate directly.

pub mod animator;
pub mod bounded;
pub mod chained;
pub mod continuous;
pub mod easing;
pub mod error;
pub mod frame;
pub mod grouped;
pub mod interpolation;
pub mod tick;

#[cfg(test)]
mod test_support;
