//! Interpolation math behind the counter animations.

use crate::format::floor_i64;

/// One displayed value for a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

/// Linear tween from `start` to `end` over `duration_ms`.
///
/// Intermediate frames show `floor(start + range * progress)`; the final
/// frame shows `end` exactly, fractions included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl Tween {
    #[must_use]
    pub const fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Progress in `[0, 1]` after `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !elapsed_ms.is_finite() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frame(&self, elapsed_ms: f64) -> Frame {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return Frame {
                value: self.end,
                done: true,
            };
        }
        let range = self.end - self.start;
        Frame {
            value: floor_i64(range.mul_add(progress, self.start)) as f64,
            done: false,
        }
    }
}

/// Tracks the first frame timestamp so callers can feed raw clock readings.
#[derive(Debug, Clone, Copy)]
pub struct TweenClock {
    tween: Tween,
    started_at: Option<f64>,
}

impl TweenClock {
    #[must_use]
    pub const fn new(tween: Tween) -> Self {
        Self {
            tween,
            started_at: None,
        }
    }

    /// Frame for an animation-frame timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> Frame {
        let start = *self.started_at.get_or_insert(timestamp_ms);
        self.tween.frame(timestamp_ms - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_frame_is_exact_regardless_of_jitter() {
        for timestamps in [
            vec![0.0, 16.0, 33.0, 701.0],
            vec![5.0, 400.0, 5000.0],
            vec![10.0, 710.0],
        ] {
            let mut clock = TweenClock::new(Tween::new(100.0, 200.0, 700.0));
            let mut last = None;
            for ts in timestamps {
                last = Some(clock.tick(ts));
            }
            let last = last.unwrap();
            assert!(last.done);
            assert!((last.value - 200.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn intermediate_frames_are_floored_and_monotonic() {
        let tween = Tween::new(100.0, 200.0, 700.0);
        let mut previous = f64::MIN;
        for elapsed in [0.0, 7.0, 100.0, 350.0, 699.0] {
            let frame = tween.frame(elapsed);
            assert!(!frame.done);
            assert!((frame.value - frame.value.floor()).abs() < f64::EPSILON);
            assert!(frame.value >= previous);
            previous = frame.value;
        }
        assert!((tween.frame(350.0).value - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decreasing_and_fractional_targets_snap_to_end() {
        let tween = Tween::new(500.0, 120.5, 700.0);
        assert!((tween.frame(350.0).value - 310.0).abs() < f64::EPSILON);
        assert!((tween.frame(700.0).value - 120.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let frame = Tween::new(1.0, 9.0, 0.0).frame(0.0);
        assert!(frame.done);
        assert!((frame.value - 9.0).abs() < f64::EPSILON);
    }
}
