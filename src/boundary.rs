//! Boundary state for page commands
//!
//! Whether a command would move its container right now. The answer is always
//! computed from the container's current offset and extents and never stored,
//! so it cannot go stale after layout, resize, programmatic scrolls or the
//! engine's own scrolls.
//!
//! Presentation maps a `true` result to `aria-disabled` on a control that stays
//! focusable. The control is never fully disabled: that would eject keyboard
//! focus to an unrelated position in the document.

use serde::Serialize;

use crate::command::{resolve, ScrollCommand};
use crate::container::ScrollContainer;
use crate::geometry::{Axis, Sign};

/// Extremes reached along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoundaryState {
  pub at_start: bool,
  pub at_end: bool,
}

impl BoundaryState {
  /// True when travel toward `sign` is blocked
  pub fn blocks(&self, sign: Sign) -> bool {
    match sign {
      Sign::Negative => self.at_start,
      Sign::Positive => self.at_end,
    }
  }
}

/// True when scrolling `container` along `axis` toward `sign` would not move it
///
/// # Examples
///
/// ```
/// use fastscroll::boundary::boundary;
/// use fastscroll::{Axis, Point, ScrollContainer, Sign, Size};
///
/// let c = ScrollContainer::new("c", Size::new(100.0, 100.0), Size::new(400.0, 100.0))
///     .with_scroll_offset(Point::new(300.0, 0.0));
/// assert!(boundary(&c, Axis::Horizontal, Sign::Positive, 0.5));
/// assert!(!boundary(&c, Axis::Horizontal, Sign::Negative, 0.5));
/// ```
pub fn boundary(container: &ScrollContainer, axis: Axis, sign: Sign, epsilon: f32) -> bool {
  boundary_state(container, axis, epsilon).blocks(sign)
}

/// Both extremes along `axis`
pub fn boundary_state(container: &ScrollContainer, axis: Axis, epsilon: f32) -> BoundaryState {
  let extent = container.viewport().along(axis);
  if !extent.is_finite() || extent <= 0.0 {
    return BoundaryState {
      at_start: true,
      at_end: true,
    };
  }

  let epsilon = epsilon.max(0.0);
  let offset = container.scroll_offset().along(axis);
  let max = container.max_offset(axis);
  BoundaryState {
    at_start: offset <= epsilon,
    at_end: offset >= max - epsilon,
  }
}

/// Resolves `command` in the container's current writing context, then checks
/// its boundary
pub fn command_at_boundary(container: &ScrollContainer, command: ScrollCommand, epsilon: f32) -> bool {
  let dir = resolve(command, &container.writing());
  boundary(container, dir.axis, dir.sign, epsilon)
}
