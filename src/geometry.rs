//! Core geometry types for scroll command resolution
//!
//! All units are CSS pixels. The coordinate system has its origin at the
//! top-left corner of the scrolled content:
//! - Positive X extends to the right
//! - Positive Y extends downward
//!
//! Scroll offsets use the same convention, so an offset of `(0, 0)` shows the
//! top-left corner of the content and the largest offset along an axis is
//! `content - viewport` along that axis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in CSS pixel space
///
/// # Examples
///
/// ```
/// use fastscroll::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  /// X coordinate (horizontal position, increases to the right)
  pub x: f32,
  /// Y coordinate (vertical position, increases downward)
  pub y: f32,
}

impl Point {
  /// The zero point at the origin (0, 0)
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Returns the component along `axis`
  pub fn along(self, axis: Axis) -> f32 {
    match axis {
      Axis::Horizontal => self.x,
      Axis::Vertical => self.y,
    }
  }

  /// Returns a copy with the component along `axis` replaced
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::{Axis, Point};
  ///
  /// let p = Point::new(1.0, 2.0).with_axis(Axis::Vertical, 9.0);
  /// assert_eq!(p, Point::new(1.0, 9.0));
  /// ```
  pub fn with_axis(self, axis: Axis, value: f32) -> Self {
    match axis {
      Axis::Horizontal => Self { x: value, ..self },
      Axis::Vertical => Self { y: value, ..self },
    }
  }
}

/// A 2D size in CSS pixels
///
/// Both width and height are expected to be non-negative, but this is not
/// enforced by the type. Consumers treat negative or non-finite extents as
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
  /// Width (horizontal extent)
  pub width: f32,
  /// Height (vertical extent)
  pub height: f32,
}

impl Size {
  /// Creates a new size with the given dimensions
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Returns the extent along `axis`
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::{Axis, Size};
  ///
  /// let size = Size::new(300.0, 200.0);
  /// assert_eq!(size.along(Axis::Horizontal), 300.0);
  /// assert_eq!(size.along(Axis::Vertical), 200.0);
  /// ```
  pub fn along(self, axis: Axis) -> f32 {
    match axis {
      Axis::Horizontal => self.width,
      Axis::Vertical => self.height,
    }
  }
}

/// An axis-aligned rectangle in CSS pixel space
///
/// Defined by an origin point (top-left corner) and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
  /// The top-left corner of the rectangle
  pub origin: Point,
  /// The size (width and height) of the rectangle
  pub size: Size,
}

impl Rect {
  /// Creates a rectangle from x, y, width, height components
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::Rect;
  ///
  /// let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
  /// assert_eq!(rect.max_x(), 110.0);
  /// assert_eq!(rect.max_y(), 70.0);
  /// ```
  pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      origin: Point::new(x, y),
      size: Size::new(width, height),
    }
  }

  pub fn min_x(&self) -> f32 {
    self.origin.x
  }

  pub fn min_y(&self) -> f32 {
    self.origin.y
  }

  pub fn max_x(&self) -> f32 {
    self.origin.x + self.size.width
  }

  pub fn max_y(&self) -> f32 {
    self.origin.y + self.size.height
  }

  /// Returns the `(start, end)` physical edges along `axis`
  pub fn span(&self, axis: Axis) -> (f32, f32) {
    match axis {
      Axis::Horizontal => (self.min_x(), self.max_x()),
      Axis::Vertical => (self.min_y(), self.max_y()),
    }
  }
}

/// Edge offsets representing spacing on all four sides
///
/// Used for scroll-padding on containers and scroll-margin on snap areas.
/// Follows CSS box model convention: top, right, bottom, left.
///
/// # Examples
///
/// ```
/// use fastscroll::geometry::{Axis, EdgeOffsets};
///
/// let padding = EdgeOffsets::new(10.0, 20.0, 30.0, 40.0);
/// assert_eq!(padding.span(Axis::Horizontal), (40.0, 20.0));
/// assert_eq!(padding.span(Axis::Vertical), (10.0, 30.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeOffsets {
  #[serde(default)]
  pub top: f32,
  #[serde(default)]
  pub right: f32,
  #[serde(default)]
  pub bottom: f32,
  #[serde(default)]
  pub left: f32,
}

impl EdgeOffsets {
  /// Zero offsets on all sides
  pub const ZERO: Self = Self {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
  };

  /// Creates edge offsets with individual values for each side
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  /// Returns the `(physical start, physical end)` offsets along `axis`
  ///
  /// Physical start is left for the horizontal axis and top for the vertical.
  pub fn span(&self, axis: Axis) -> (f32, f32) {
    match axis {
      Axis::Horizontal => (self.left, self.right),
      Axis::Vertical => (self.top, self.bottom),
    }
  }
}

/// A physical scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
  Horizontal,
  Vertical,
}

impl Axis {
  /// The other physical axis
  pub fn cross(self) -> Self {
    match self {
      Axis::Horizontal => Axis::Vertical,
      Axis::Vertical => Axis::Horizontal,
    }
  }

  /// Lowercase name used in accessible names and JSON output
  pub fn as_str(self) -> &'static str {
    match self {
      Axis::Horizontal => "horizontal",
      Axis::Vertical => "vertical",
    }
  }
}

impl fmt::Display for Axis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Direction of travel along a physical axis
///
/// `Negative` moves toward offset 0 (up or left), `Positive` toward the
/// maximum offset (down or right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  /// `-1.0` or `+1.0`
  pub fn factor(self) -> f32 {
    match self {
      Sign::Negative => -1.0,
      Sign::Positive => 1.0,
    }
  }

  pub fn flip(self) -> Self {
    match self {
      Sign::Negative => Sign::Positive,
      Sign::Positive => Sign::Negative,
    }
  }

  /// Returns `self` flipped when `reversed` is set
  pub fn reversed_if(self, reversed: bool) -> Self {
    if reversed {
      self.flip()
    } else {
      self
    }
  }
}

impl fmt::Display for Sign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Sign::Negative => "-1",
      Sign::Positive => "+1",
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn axis_accessors_pick_matching_component() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.along(Axis::Horizontal), 3.0);
    assert_eq!(p.along(Axis::Vertical), 4.0);
    assert_eq!(p.with_axis(Axis::Horizontal, 7.0), Point::new(7.0, 4.0));
    assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
  }

  #[test]
  fn sign_reversal() {
    assert_eq!(Sign::Positive.reversed_if(true), Sign::Negative);
    assert_eq!(Sign::Positive.reversed_if(false), Sign::Positive);
    assert_eq!(Sign::Negative.factor(), -1.0);
  }

  #[test]
  fn rect_span_follows_axis() {
    let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.span(Axis::Horizontal), (10.0, 40.0));
    assert_eq!(rect.span(Axis::Vertical), (20.0, 60.0));
  }
}
