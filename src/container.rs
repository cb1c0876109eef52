//! Scroll container model
//!
//! A [`ScrollContainer`] is the target of page commands. It owns the
//! authoritative scroll offset, the viewport and content extents supplied by
//! layout, the writing context, and the snap points registered on each axis.
//!
//! The offset is kept inside `[0, content - viewport]` on both axes at all
//! times; every setter re-clamps. Snap points are stored as supplied and
//! validated on read, since a layout change can invalidate a previously
//! consistent list.

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, EdgeOffsets, Point, Rect, Size};
use crate::style::{ScrollBehavior, ScrollSnapAlign, ScrollSnapAlignments, ScrollSnapStop};
use crate::style::WritingContext;

/// Slack allowed when checking snap offsets against the scroll range
pub const SNAP_RANGE_TOLERANCE: f32 = 0.5;

/// A registered snap offset along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
  pub axis: Axis,
  pub offset: f32,
  #[serde(default)]
  pub stop: ScrollSnapStop,
}

impl SnapPoint {
  pub const fn new(axis: Axis, offset: f32) -> Self {
    Self {
      axis,
      offset,
      stop: ScrollSnapStop::Normal,
    }
  }

  pub const fn always(axis: Axis, offset: f32) -> Self {
    Self {
      axis,
      offset,
      stop: ScrollSnapStop::Always,
    }
  }
}

/// A descendant's snap area, relative to the scrolled content's origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapArea {
  pub rect: Rect,
  #[serde(default)]
  pub align: ScrollSnapAlignments,
  #[serde(default)]
  pub stop: ScrollSnapStop,
  /// CSS `scroll-margin`
  #[serde(default)]
  pub margin: EdgeOffsets,
}

impl SnapArea {
  pub fn new(rect: Rect, align: ScrollSnapAlignments) -> Self {
    Self {
      rect,
      align,
      stop: ScrollSnapStop::Normal,
      margin: EdgeOffsets::ZERO,
    }
  }
}

/// The target of page scroll commands
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollContainer {
  id: String,
  scroll_offset: Point,
  viewport: Size,
  content: Size,
  writing: WritingContext,
  behavior: ScrollBehavior,
  accessible_name: Option<String>,
  scroll_padding: EdgeOffsets,
  snap_x: Vec<SnapPoint>,
  snap_y: Vec<SnapPoint>,
  snap_areas: Option<Vec<SnapArea>>,
}

impl ScrollContainer {
  /// Creates a container scrolled to the origin with no snap points
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::{Axis, ScrollContainer, Size};
  ///
  /// let gallery = ScrollContainer::new("gallery", Size::new(300.0, 200.0), Size::new(1200.0, 200.0));
  /// assert_eq!(gallery.max_offset(Axis::Horizontal), 900.0);
  /// assert_eq!(gallery.max_offset(Axis::Vertical), 0.0);
  /// ```
  pub fn new(id: impl Into<String>, viewport: Size, content: Size) -> Self {
    Self {
      id: id.into(),
      scroll_offset: Point::ZERO,
      viewport,
      content,
      writing: WritingContext::default(),
      behavior: ScrollBehavior::Auto,
      accessible_name: None,
      scroll_padding: EdgeOffsets::ZERO,
      snap_x: Vec::new(),
      snap_y: Vec::new(),
      snap_areas: None,
    }
  }

  pub fn with_writing(mut self, writing: WritingContext) -> Self {
    self.set_writing(writing);
    self
  }

  pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
    self.behavior = behavior;
    self
  }

  pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
    self.accessible_name = Some(name.into());
    self
  }

  pub fn with_scroll_offset(mut self, offset: Point) -> Self {
    self.set_scroll_offset(offset);
    self
  }

  pub fn with_snap_points(mut self, points: impl IntoIterator<Item = SnapPoint>) -> Self {
    self.set_snap_points(points);
    self
  }

  pub fn with_scroll_padding(mut self, padding: EdgeOffsets) -> Self {
    self.scroll_padding = padding;
    self.rederive_snap_points();
    self
  }

  pub fn with_snap_areas(mut self, areas: Vec<SnapArea>) -> Self {
    self.set_snap_areas(areas);
    self
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn scroll_offset(&self) -> Point {
    self.scroll_offset
  }

  pub fn viewport(&self) -> Size {
    self.viewport
  }

  pub fn content(&self) -> Size {
    self.content
  }

  pub fn writing(&self) -> WritingContext {
    self.writing
  }

  pub fn behavior(&self) -> ScrollBehavior {
    self.behavior
  }

  pub fn accessible_name(&self) -> Option<&str> {
    self.accessible_name.as_deref()
  }

  /// Largest reachable offset along `axis`
  pub fn max_offset(&self, axis: Axis) -> f32 {
    let scrollable = self.content.along(axis) - self.viewport.along(axis);
    if scrollable.is_finite() {
      scrollable.max(0.0)
    } else {
      0.0
    }
  }

  /// Clamps `value` into `[0, max_offset(axis)]`
  pub fn clamp_offset(&self, axis: Axis, value: f32) -> f32 {
    if !value.is_finite() {
      return 0.0;
    }
    value.clamp(0.0, self.max_offset(axis))
  }

  /// Writes a new offset, clamped into the scroll range
  pub fn set_scroll_offset(&mut self, offset: Point) {
    self.scroll_offset = Point::new(
      self.clamp_offset(Axis::Horizontal, offset.x),
      self.clamp_offset(Axis::Vertical, offset.y),
    );
  }

  /// Writes the offset along a single axis
  pub fn set_axis_offset(&mut self, axis: Axis, value: f32) {
    let clamped = self.clamp_offset(axis, value);
    self.scroll_offset = self.scroll_offset.with_axis(axis, clamped);
  }

  /// Layout update: new extents, offset re-clamped, derived snap points rebuilt
  pub fn set_extents(&mut self, viewport: Size, content: Size) {
    self.viewport = viewport;
    self.content = content;
    self.set_scroll_offset(self.scroll_offset);
    self.rederive_snap_points();
  }

  /// Style update: writing-mode or direction changed
  pub fn set_writing(&mut self, writing: WritingContext) {
    self.writing = writing;
    self.rederive_snap_points();
  }

  pub fn set_behavior(&mut self, behavior: ScrollBehavior) {
    self.behavior = behavior;
  }

  pub fn set_accessible_name(&mut self, name: Option<String>) {
    self.accessible_name = name;
  }

  /// Replaces snap points with an explicit list, dropping any snap areas
  pub fn set_snap_points(&mut self, points: impl IntoIterator<Item = SnapPoint>) {
    self.snap_areas = None;
    self.snap_x.clear();
    self.snap_y.clear();
    for point in points {
      match point.axis {
        Axis::Horizontal => self.snap_x.push(point),
        Axis::Vertical => self.snap_y.push(point),
      }
    }
  }

  /// Replaces snap points with ones derived from descendant snap areas
  ///
  /// Derived points are recomputed on every later layout or writing-mode
  /// change.
  pub fn set_snap_areas(&mut self, areas: Vec<SnapArea>) {
    self.snap_areas = Some(areas);
    self.rederive_snap_points();
  }

  /// Snap points registered on `axis`, unvalidated
  pub fn snap_points(&self, axis: Axis) -> &[SnapPoint] {
    match axis {
      Axis::Horizontal => &self.snap_x,
      Axis::Vertical => &self.snap_y,
    }
  }

  /// Snap points on `axis` if they are finite, ordered and inside the scroll
  /// range; `None` when the axis has no usable snap data
  pub fn valid_snap_points(&self, axis: Axis) -> Option<&[SnapPoint]> {
    let points = self.snap_points(axis);
    if points.is_empty() {
      return None;
    }
    let max = self.max_offset(axis);
    let in_range = points.iter().all(|p| {
      p.offset.is_finite()
        && p.offset >= -SNAP_RANGE_TOLERANCE
        && p.offset <= max + SNAP_RANGE_TOLERANCE
    });
    let ordered = points.windows(2).all(|w| w[0].offset <= w[1].offset);
    if in_range && ordered {
      Some(points)
    } else {
      tracing::debug!(
        container = %self.id,
        %axis,
        count = points.len(),
        in_range,
        ordered,
        "ignoring inconsistent snap points"
      );
      None
    }
  }

  fn rederive_snap_points(&mut self) {
    let Some(areas) = self.snap_areas.as_ref() else {
      return;
    };
    let snap_x = derive_snap_points(areas, Axis::Horizontal, self);
    let snap_y = derive_snap_points(areas, Axis::Vertical, self);
    self.snap_x = snap_x;
    self.snap_y = snap_y;
  }
}

/// Direction in which the logical start-to-end progression runs along `axis`
fn axis_start_is_physical_start(writing: &WritingContext, axis: Axis) -> bool {
  if writing.is_inline_axis(axis) {
    writing.inline_is_left_to_right
  } else {
    !writing.block_is_reversed
  }
}

fn derive_snap_points(areas: &[SnapArea], axis: Axis, container: &ScrollContainer) -> Vec<SnapPoint> {
  let writing = container.writing;
  let inline = writing.is_inline_axis(axis);
  let positive = axis_start_is_physical_start(&writing, axis);
  let viewport_extent = container.viewport.along(axis);
  let max = container.max_offset(axis);
  let padding = logical_span(container.scroll_padding.span(axis), positive);

  let mut points: Vec<SnapPoint> = areas
    .iter()
    .filter_map(|area| {
      let align = if inline {
        area.align.inline
      } else {
        area.align.block
      };
      let (phys_start, phys_end) = area.rect.span(axis);
      let margin = logical_span(area.margin.span(axis), positive);
      snap_position(
        align,
        phys_start,
        phys_end,
        viewport_extent,
        padding,
        margin,
        positive,
      )
      .filter(|pos| pos.is_finite())
      .map(|pos| SnapPoint {
        axis,
        offset: pos.clamp(0.0, max),
        stop: area.stop,
      })
    })
    .collect();

  points.sort_by(|a, b| a.offset.total_cmp(&b.offset));
  // Keep `always` when two areas land on the same offset.
  points.dedup_by(|later, earlier| {
    if (later.offset - earlier.offset).abs() <= f32::EPSILON {
      if later.stop == ScrollSnapStop::Always {
        earlier.stop = ScrollSnapStop::Always;
      }
      true
    } else {
      false
    }
  });
  points
}

fn logical_span(physical: (f32, f32), positive: bool) -> (f32, f32) {
  if positive {
    physical
  } else {
    (physical.1, physical.0)
  }
}

/// Scroll offset that aligns an area with the snapport
///
/// `padding` and `margin` are `(logical start, logical end)`.
fn snap_position(
  alignment: ScrollSnapAlign,
  phys_start: f32,
  phys_end: f32,
  viewport_extent: f32,
  padding: (f32, f32),
  margin: (f32, f32),
  axis_positive: bool,
) -> Option<f32> {
  let (padding_start, padding_end) = (padding.0.max(0.0), padding.1.max(0.0));
  let (margin_start, margin_end) = margin;
  let target_start = if axis_positive {
    phys_start - margin_start
  } else {
    phys_end + margin_start
  };
  let target_end = if axis_positive {
    phys_end + margin_end
  } else {
    phys_start - margin_end
  };

  let snapport_start_offset = if axis_positive {
    padding_start
  } else {
    viewport_extent - padding_start
  };
  let snapport_end_offset = if axis_positive {
    viewport_extent - padding_end
  } else {
    padding_end
  };

  match alignment {
    ScrollSnapAlign::None => None,
    ScrollSnapAlign::Start => Some(target_start - snapport_start_offset),
    ScrollSnapAlign::End => Some(target_end - snapport_end_offset),
    ScrollSnapAlign::Center => {
      let target_center = (target_start + target_end) * 0.5;
      let snapport_center = (snapport_start_offset + snapport_end_offset) * 0.5;
      Some(target_center - snapport_center)
    }
  }
}
