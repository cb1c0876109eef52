//! Smooth settling for engine-initiated scrolls.
//!
//! The destination of a page scroll is decided before any animation starts;
//! a [`ScrollAnimation`] only interpolates toward that fixed target. Time is
//! supplied by the caller as a monotonic [`Duration`] since an arbitrary epoch,
//! which keeps sampling deterministic in tests.
//!
//! A container has at most one animation in flight. Starting another replaces
//! it, beginning from whatever offset the container currently shows.

use std::time::Duration;

use serde::Serialize;

use crate::geometry::Axis;

/// An in-flight scroll along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollAnimation {
  pub axis: Axis,
  pub from: f32,
  pub to: f32,
  #[serde(skip)]
  pub started_at: Duration,
  #[serde(skip)]
  pub duration: Duration,
}

impl ScrollAnimation {
  pub fn new(axis: Axis, from: f32, to: f32, started_at: Duration, duration: Duration) -> Self {
    Self {
      axis,
      from,
      to,
      started_at,
      duration,
    }
  }

  /// Progress in `[0, 1]` at `now`
  pub fn progress(&self, now: Duration) -> f32 {
    if self.duration.is_zero() {
      return 1.0;
    }
    let elapsed = now.saturating_sub(self.started_at);
    (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
  }

  /// Offset along `axis` at `now`
  ///
  /// # Examples
  ///
  /// ```
  /// use std::time::Duration;
  /// use fastscroll::animation::ScrollAnimation;
  /// use fastscroll::Axis;
  ///
  /// let anim = ScrollAnimation::new(Axis::Vertical, 0.0, 100.0, Duration::ZERO, Duration::from_millis(100));
  /// assert_eq!(anim.offset_at(Duration::ZERO), 0.0);
  /// assert!((anim.offset_at(Duration::from_millis(50)) - 50.0).abs() < 1e-3);
  /// assert_eq!(anim.offset_at(Duration::from_millis(500)), 100.0);
  /// ```
  pub fn offset_at(&self, now: Duration) -> f32 {
    let t = self.progress(now);
    if t >= 1.0 {
      return self.to;
    }
    self.from + (self.to - self.from) * ease_in_out_cubic(t)
  }

  pub fn is_finished(&self, now: Duration) -> bool {
    self.progress(now) >= 1.0
  }
}

/// Cubic ease-in-out (slow start and end)
fn ease_in_out_cubic(t: f32) -> f32 {
  if t < 0.5 {
    4.0 * t * t * t
  } else {
    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_duration_finishes_immediately() {
    let anim = ScrollAnimation::new(Axis::Horizontal, 10.0, 280.0, Duration::from_secs(1), Duration::ZERO);
    assert!(anim.is_finished(Duration::from_secs(1)));
    assert_eq!(anim.offset_at(Duration::from_secs(1)), 280.0);
  }

  #[test]
  fn samples_are_monotonic_toward_target() {
    let anim = ScrollAnimation::new(
      Axis::Horizontal,
      300.0,
      30.0,
      Duration::from_millis(1000),
      Duration::from_millis(150),
    );
    let mut last = anim.offset_at(Duration::from_millis(1000));
    assert_eq!(last, 300.0);
    for ms in (1010..=1150).step_by(10) {
      let value = anim.offset_at(Duration::from_millis(ms));
      assert!(value <= last, "offset went backwards at {ms}ms");
      last = value;
    }
    assert_eq!(last, 30.0);
  }

  #[test]
  fn time_before_start_reads_origin() {
    let anim = ScrollAnimation::new(
      Axis::Vertical,
      0.0,
      100.0,
      Duration::from_millis(500),
      Duration::from_millis(100),
    );
    assert_eq!(anim.offset_at(Duration::from_millis(100)), 0.0);
    assert!(!anim.is_finished(Duration::from_millis(550)));
  }
}
