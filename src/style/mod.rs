//! Style inputs for scroll command resolution
//!
//! [`WritingContext`] condenses a container's `writing-mode` and `direction`
//! into the three facts the direction resolver needs. It is owned by the
//! container and must be rebuilt whenever either property changes.

pub mod types;

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;
pub use types::{
  Direction, ScrollBehavior, ScrollSnapAlign, ScrollSnapAlignments, ScrollSnapStop, WritingMode,
};

/// Axis orientation and progression derived from writing-mode + direction
///
/// For vertical writing modes `inline_is_left_to_right` reads as "inline
/// progresses toward the positive physical direction", i.e. top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingContext {
  pub block_axis_is_vertical: bool,
  pub inline_is_left_to_right: bool,
  /// Block progression runs toward the physical start (right-to-left in
  /// `vertical-rl`)
  #[serde(default)]
  pub block_is_reversed: bool,
}

impl WritingContext {
  /// `horizontal-tb`, `ltr`
  pub const HORIZONTAL_LTR: Self = Self {
    block_axis_is_vertical: true,
    inline_is_left_to_right: true,
    block_is_reversed: false,
  };

  pub const fn new(block_axis_is_vertical: bool, inline_is_left_to_right: bool) -> Self {
    Self {
      block_axis_is_vertical,
      inline_is_left_to_right,
      block_is_reversed: false,
    }
  }

  pub const fn with_block_reversed(mut self, reversed: bool) -> Self {
    self.block_is_reversed = reversed;
    self
  }

  /// Derives the context from computed `writing-mode` and `direction`
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::style::{Direction, WritingContext, WritingMode};
  ///
  /// let ctx = WritingContext::from_style(WritingMode::VerticalRl, Direction::Ltr);
  /// assert!(!ctx.block_axis_is_vertical);
  /// assert!(ctx.block_is_reversed);
  /// ```
  pub fn from_style(mode: WritingMode, direction: Direction) -> Self {
    let block_is_reversed = matches!(mode, WritingMode::VerticalRl | WritingMode::SidewaysRl);
    // sideways-lr lays lines bottom-to-top.
    let inline_is_left_to_right = (direction == Direction::Ltr) != (mode == WritingMode::SidewaysLr);
    Self {
      block_axis_is_vertical: !mode.is_vertical(),
      inline_is_left_to_right,
      block_is_reversed,
    }
  }

  pub fn block_axis(&self) -> Axis {
    if self.block_axis_is_vertical {
      Axis::Vertical
    } else {
      Axis::Horizontal
    }
  }

  pub fn inline_axis(&self) -> Axis {
    self.block_axis().cross()
  }

  /// True when `axis` is this context's inline axis
  pub fn is_inline_axis(&self, axis: Axis) -> bool {
    self.inline_axis() == axis
  }
}

impl Default for WritingContext {
  fn default() -> Self {
    Self::HORIZONTAL_LTR
  }
}
