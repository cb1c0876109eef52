//! Scroll command resolution engine
//!
//! [`ScrollCommandEngine::invoke`] runs the full decision pipeline for one
//! command against one container:
//!
//! 1. resolve the command to a physical axis and sign,
//! 2. compute the page distance along that axis,
//! 3. pick the resting offset with snap points taken into account.
//!
//! The engine never mutates the container. It returns a [`ScrollInstruction`]
//! for the caller to apply (see [`ScrollDocument`](crate::document::ScrollDocument))
//! or a no-op with the reason nothing would move. The boundary and
//! accessible-name queries are pure and can be called at any time.

use serde::Serialize;

use crate::accessibility::compose_name;
use crate::boundary::{boundary, boundary_state, BoundaryState};
use crate::command::{resolve, ScrollCommand};
use crate::config::EngineConfig;
use crate::container::ScrollContainer;
use crate::error::Result;
use crate::geometry::{Axis, Sign};
use crate::invoker::Invoker;
use crate::scroll::{page_delta, resolve_snap};
use crate::style::ScrollBehavior;

/// Why an invocation did not scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoOpReason {
  /// No live container has the target id
  UnknownTarget,
  /// More than one live container has the target id
  AmbiguousTarget,
  /// No invoker has the given id
  UnknownInvoker,
  /// The viewport has no extent along the resolved axis
  EmptyViewport,
  /// Content fits inside the viewport along the resolved axis
  NothingToScroll,
  /// Already at the extreme in the direction of travel
  AtBoundary,
}

/// The decided scroll for one invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollInstruction {
  pub target: String,
  pub axis: Axis,
  pub sign: Sign,
  /// Offset along `axis` when the decision was made
  pub from: f32,
  /// Resting offset along `axis`
  pub final_offset: f32,
  /// Animation hint from the container's `scroll-behavior`
  pub behavior: ScrollBehavior,
}

/// Result of [`ScrollCommandEngine::invoke`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum InvokeOutcome {
  Scrolled(ScrollInstruction),
  NoOp { reason: NoOpReason },
}

impl InvokeOutcome {
  pub fn no_op(reason: NoOpReason) -> Self {
    InvokeOutcome::NoOp { reason }
  }

  pub fn instruction(&self) -> Option<&ScrollInstruction> {
    match self {
      InvokeOutcome::Scrolled(instruction) => Some(instruction),
      InvokeOutcome::NoOp { .. } => None,
    }
  }

  pub fn is_no_op(&self) -> bool {
    matches!(self, InvokeOutcome::NoOp { .. })
  }
}

/// Stateless page-command engine parameterized by [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct ScrollCommandEngine {
  config: EngineConfig,
}

impl ScrollCommandEngine {
  /// Creates an engine after validating `config`
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`](crate::Error::Config) when a knob is out of range.
  pub fn new(config: EngineConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  /// Decides where `command` would take `container`
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::{ScrollCommand, ScrollCommandEngine, ScrollContainer, Size};
  ///
  /// let engine = ScrollCommandEngine::default();
  /// let list = ScrollContainer::new("list", Size::new(200.0, 300.0), Size::new(200.0, 1000.0));
  /// let outcome = engine.invoke(ScrollCommand::PageDown, &list);
  /// let instruction = outcome.instruction().unwrap();
  /// assert!((instruction.final_offset - 270.0).abs() < 1e-3);
  /// ```
  pub fn invoke(&self, command: ScrollCommand, container: &ScrollContainer) -> InvokeOutcome {
    let dir = resolve(command, &container.writing());
    let Some(magnitude) = page_delta(dir.axis, container, &self.config) else {
      tracing::debug!(container = container.id(), %command, "no-op: empty viewport");
      return InvokeOutcome::no_op(NoOpReason::EmptyViewport);
    };

    let max_offset = container.max_offset(dir.axis);
    if max_offset <= 0.0 {
      tracing::debug!(container = container.id(), %command, "no-op: nothing to scroll");
      return InvokeOutcome::no_op(NoOpReason::NothingToScroll);
    }
    if boundary(container, dir.axis, dir.sign, self.config.boundary_epsilon) {
      tracing::debug!(container = container.id(), %command, "no-op: at boundary");
      return InvokeOutcome::no_op(NoOpReason::AtBoundary);
    }

    let current = container.scroll_offset().along(dir.axis);
    let points = container.valid_snap_points(dir.axis).unwrap_or(&[]);
    let final_offset = resolve_snap(points, current, dir.sign, magnitude, max_offset);

    tracing::debug!(
      container = container.id(),
      %command,
      axis = %dir.axis,
      sign = %dir.sign,
      from = current,
      to = final_offset,
      snap_points = points.len(),
      "page scroll decided"
    );

    InvokeOutcome::Scrolled(ScrollInstruction {
      target: container.id().to_string(),
      axis: dir.axis,
      sign: dir.sign,
      from: current,
      final_offset,
      behavior: container.behavior(),
    })
  }

  /// True when scrolling along `axis` toward `sign` would not move `container`
  pub fn boundary(&self, container: &ScrollContainer, axis: Axis, sign: Sign) -> bool {
    boundary(container, axis, sign, self.config.boundary_epsilon)
  }

  pub fn boundary_state(&self, container: &ScrollContainer, axis: Axis) -> BoundaryState {
    boundary_state(container, axis, self.config.boundary_epsilon)
  }

  /// True when `command` would not move `container` right now
  pub fn command_blocked(&self, command: ScrollCommand, container: &ScrollContainer) -> bool {
    let dir = resolve(command, &container.writing());
    self.boundary(container, dir.axis, dir.sign)
  }

  /// Announced name for `invoker` targeting `container`
  pub fn accessible_name(
    &self,
    invoker: &Invoker,
    container: Option<&ScrollContainer>,
    multi_axis: bool,
  ) -> String {
    compose_name(invoker, container, multi_axis, &self.config.locale)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::container::SnapPoint;
  use crate::geometry::{Point, Size};
  use crate::style::WritingContext;

  fn gallery() -> ScrollContainer {
    ScrollContainer::new("gallery", Size::new(300.0, 200.0), Size::new(1000.0, 200.0))
  }

  #[test]
  fn page_right_moves_by_page() {
    let engine = ScrollCommandEngine::default();
    let outcome = engine.invoke(ScrollCommand::PageRight, &gallery());
    let instruction = outcome.instruction().unwrap();
    assert_eq!(instruction.axis, Axis::Horizontal);
    assert_eq!(instruction.sign, Sign::Positive);
    assert_eq!(instruction.from, 0.0);
    assert!((instruction.final_offset - 270.0).abs() < 1e-3);
  }

  #[test]
  fn snaps_to_point_within_page() {
    let engine = ScrollCommandEngine::default();
    let c = gallery().with_snap_points(
      [0.0, 100.0, 205.0, 400.0]
        .into_iter()
        .map(|o| SnapPoint::new(Axis::Horizontal, o)),
    );
    let outcome = engine.invoke(ScrollCommand::PageInlineEnd, &c);
    assert_eq!(outcome.instruction().unwrap().final_offset, 205.0);
  }

  #[test]
  fn inconsistent_snap_points_fall_back_to_raw_page() {
    let engine = ScrollCommandEngine::default();
    let c = gallery().with_snap_points(
      [400.0, 100.0]
        .into_iter()
        .map(|o| SnapPoint::new(Axis::Horizontal, o)),
    );
    let outcome = engine.invoke(ScrollCommand::PageRight, &c);
    assert!((outcome.instruction().unwrap().final_offset - 270.0).abs() < 1e-3);
  }

  #[test]
  fn no_op_reasons() {
    let engine = ScrollCommandEngine::default();
    assert_eq!(
      engine.invoke(ScrollCommand::PageDown, &gallery()),
      InvokeOutcome::no_op(NoOpReason::NothingToScroll)
    );
    assert_eq!(
      engine.invoke(ScrollCommand::PageLeft, &gallery()),
      InvokeOutcome::no_op(NoOpReason::AtBoundary)
    );
    let empty = ScrollContainer::new("e", Size::new(0.0, 0.0), Size::new(500.0, 500.0));
    assert_eq!(
      engine.invoke(ScrollCommand::PageRight, &empty),
      InvokeOutcome::no_op(NoOpReason::EmptyViewport)
    );
  }

  #[test]
  fn rtl_inline_end_scrolls_left() {
    let engine = ScrollCommandEngine::default();
    let c = gallery()
      .with_writing(WritingContext::new(true, false))
      .with_scroll_offset(Point::new(700.0, 0.0));
    let instruction = engine.invoke(ScrollCommand::PageInlineEnd, &c);
    let instruction = instruction.instruction().unwrap();
    assert_eq!(instruction.sign, Sign::Negative);
    assert!((instruction.final_offset - 430.0).abs() < 1e-3);
  }

  #[test]
  fn queries_are_idempotent() {
    let engine = ScrollCommandEngine::default();
    let c = gallery()
      .with_accessible_name("Gallery")
      .with_scroll_offset(Point::new(700.0, 0.0));
    let invoker = Invoker::new("next", ScrollCommand::PageRight, "gallery");
    let first = (
      engine.boundary(&c, Axis::Horizontal, Sign::Positive),
      engine.accessible_name(&invoker, Some(&c), true),
    );
    let second = (
      engine.boundary(&c, Axis::Horizontal, Sign::Positive),
      engine.accessible_name(&invoker, Some(&c), true),
    );
    assert_eq!(first, second);
    assert_eq!(first, (true, "Page right, horizontal, Gallery".to_string()));
  }

  #[test]
  fn invalid_config_is_rejected() {
    let config = EngineConfig::default().with_overlap_ratio(-0.1);
    assert!(ScrollCommandEngine::new(config).is_err());
  }
}
