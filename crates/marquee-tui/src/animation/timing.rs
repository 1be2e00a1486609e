//! Time calculation utilities for the loop timeline
//!
//! Pure functions over elapsed time; the caller owns the clock.

use std::time::Duration;

/// Position within the current loop cycle, in [0, 1).
///
/// Wraps back to 0.0 at every cycle boundary, so the end offset is never held.
pub fn loop_fraction(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).fract()
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
