// SPDX-License-Identifier: MPL-2.0
//! Time-to-progress helpers shared by the animated canvas layers.
//!
//! Views never hold animation state of their own: they derive a clamped
//! progress value from an `Instant` timestamp and the frame clock, then
//! ease it. This keeps every animation resumable from pure data.

use std::time::Duration;

/// Linear progress of `elapsed` through `duration`, clamped to `[0, 1]`.
#[must_use]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased progress of `elapsed` through `duration`.
#[must_use]
pub fn eased(elapsed: Duration, duration: Duration) -> f32 {
    ease_in_out(progress(elapsed, duration))
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_unit_interval() {
        let one_sec = Duration::from_secs(1);
        assert_eq!(progress(Duration::ZERO, one_sec), 0.0);
        assert_eq!(progress(Duration::from_millis(500), one_sec), 0.5);
        assert_eq!(progress(Duration::from_secs(5), one_sec), 1.0);
    }

    #[test]
    fn progress_of_zero_duration_is_complete() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn ease_in_out_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = ease_in_out(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn ease_in_out_clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-2.0), 0.0);
        assert_eq!(ease_in_out(3.0), 1.0);
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }
}
