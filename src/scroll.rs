//! Page distance and snap-aware target selection
//!
//! A page command moves a container by roughly one visible extent. The raw
//! distance comes from [`page_delta`]; [`resolve_snap`] then turns the raw
//! destination into the offset the container should come to rest at.
//!
//! Snap selection is a search over the ordered snap list rather than a "go to
//! the next snap point" step, so scrollers with many small snap items still
//! advance about a page per command.

use crate::config::EngineConfig;
use crate::container::{ScrollContainer, SnapPoint};
use crate::geometry::{Axis, Sign};
use crate::style::ScrollSnapStop;

/// Distances closer than this are treated as equal when comparing snap offsets
pub const SNAP_EPSILON: f32 = 0.01;

/// Raw "one page" distance along `axis`
///
/// Returns `None` when the viewport has no extent along `axis`, in which case
/// there is nothing to page through.
///
/// # Examples
///
/// ```
/// use fastscroll::config::EngineConfig;
/// use fastscroll::scroll::page_delta;
/// use fastscroll::{Axis, ScrollContainer, Size};
///
/// let c = ScrollContainer::new("c", Size::new(300.0, 100.0), Size::new(900.0, 100.0));
/// let delta = page_delta(Axis::Horizontal, &c, &EngineConfig::default()).unwrap();
/// assert!((delta - 270.0).abs() < 1e-3);
/// ```
pub fn page_delta(axis: Axis, container: &ScrollContainer, config: &EngineConfig) -> Option<f32> {
  let extent = container.viewport().along(axis);
  if !extent.is_finite() || extent <= 0.0 {
    return None;
  }

  let mut overlap = extent * config.overlap_ratio.clamp(0.0, 1.0);
  if let Some(max) = config.max_overlap {
    overlap = overlap.min(max.max(0.0));
  }
  let magnitude = extent - overlap;
  if magnitude > 0.0 {
    Some(magnitude)
  } else {
    // Only reachable with an unvalidated ratio of 1.0; page by the full extent.
    Some(extent)
  }
}

/// Final resting offset for a page scroll
///
/// `points` must be the validated snap list for the axis (ordered, in range);
/// an empty slice means the axis does not snap. The result never lies behind
/// `current` relative to `sign` and is always inside `[0, max_offset]`.
///
/// # Examples
///
/// ```
/// use fastscroll::container::SnapPoint;
/// use fastscroll::scroll::resolve_snap;
/// use fastscroll::{Axis, Sign};
///
/// let points: Vec<_> = [0.0, 100.0, 205.0, 400.0]
///     .into_iter()
///     .map(|o| SnapPoint::new(Axis::Horizontal, o))
///     .collect();
/// let target = resolve_snap(&points, 0.0, Sign::Positive, 270.0, 700.0);
/// assert_eq!(target, 205.0);
/// ```
pub fn resolve_snap(
  points: &[SnapPoint],
  current: f32,
  sign: Sign,
  magnitude: f32,
  max_offset: f32,
) -> f32 {
  let max_offset = max_offset.max(0.0);
  let direction = sign.factor();
  let candidate = (current + direction * magnitude).clamp(0.0, max_offset);
  if points.is_empty() {
    return candidate;
  }

  let progress = |offset: f32| direction * (offset - current);
  let candidate_progress = progress(candidate);

  let mut within: Option<(f32, SnapPoint)> = None;
  let mut beyond: Option<(f32, SnapPoint)> = None;
  for &point in points {
    let p = progress(point.offset);
    if p <= SNAP_EPSILON {
      continue;
    }
    if p <= candidate_progress + SNAP_EPSILON {
      if within.map_or(true, |(best, _)| p > best) {
        within = Some((p, point));
      }
    } else if beyond.map_or(true, |(best, _)| p < best) {
      beyond = Some((p, point));
    }
  }

  let chosen = match (within, beyond) {
    (None, None) => {
      tracing::trace!(current, candidate, "no snap point ahead, using raw page target");
      return candidate;
    }
    (Some(w), None) => w,
    (None, Some(b)) => b,
    (Some(w), Some(b)) => {
      let dist_within = candidate_progress - w.0;
      let dist_beyond = b.0 - candidate_progress;
      if dist_beyond <= dist_within + SNAP_EPSILON {
        b
      } else {
        w
      }
    }
  };

  let stop = points
    .iter()
    .filter(|point| point.stop == ScrollSnapStop::Always)
    .map(|point| (progress(point.offset), *point))
    .filter(|(p, _)| *p > SNAP_EPSILON && *p < chosen.0 - SNAP_EPSILON)
    .min_by(|a, b| a.0.total_cmp(&b.0));

  let (_, point) = stop.unwrap_or(chosen);
  point.offset.clamp(0.0, max_offset)
}
