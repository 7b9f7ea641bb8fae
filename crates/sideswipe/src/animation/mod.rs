//! Animation support for settle transitions.
//!
//! This module provides easing functions and the offset animation used to
//! settle a row after a drag ends.
//!
//! # Example
//!
//! ```ignore
//! use sideswipe::animation::{Easing, ease};
//!
//! let progress = 0.5;
//! let eased = ease(Easing::EaseOutCubic, progress);
//! ```

mod easing;
mod offset;

pub use easing::{Easing, ease, lerp_eased};
pub use offset::{DEFAULT_SETTLE_DURATION, OffsetAnimation};
