//! Live containers and invokers addressable by id
//!
//! [`ScrollDocument`] is the stateful side of the engine: it resolves an
//! invoker's `target_id` to exactly one live container, applies decided
//! scrolls (instantly or through a [`ScrollAnimation`]), and answers
//! presentation queries for every control.
//!
//! Presentation state is derived on each query from the current offsets, so
//! it is safe to read while an animation is in flight.

use std::collections::BTreeSet;
use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::accessibility::ControlPresentation;
use crate::animation::ScrollAnimation;
use crate::command::{resolve, ScrollCommand};
use crate::config::MultiAxisPolicy;
use crate::container::ScrollContainer;
use crate::engine::{InvokeOutcome, NoOpReason, ScrollCommandEngine};
use crate::geometry::Point;
use crate::invoker::Invoker;
use crate::style::ScrollBehavior;

/// Registry of scroll containers and the controls that target them
#[derive(Debug, Default)]
pub struct ScrollDocument {
  engine: ScrollCommandEngine,
  containers: Vec<ScrollContainer>,
  invokers: Vec<Invoker>,
  animations: FxHashMap<String, ScrollAnimation>,
}

impl ScrollDocument {
  pub fn new(engine: ScrollCommandEngine) -> Self {
    Self {
      engine,
      ..Self::default()
    }
  }

  pub fn engine(&self) -> &ScrollCommandEngine {
    &self.engine
  }

  /// Adds a container. A second container with the same id makes the id
  /// unresolvable until only one of them remains; use
  /// [`remove_container_at`](Self::remove_container_at) to drop a single one.
  pub fn insert_container(&mut self, container: ScrollContainer) {
    if self.containers.iter().any(|c| c.id() == container.id()) {
      tracing::warn!(id = container.id(), "duplicate scroll container id");
      self.animations.remove(container.id());
    }
    self.containers.push(container);
  }

  /// Removes every container with `id`, cancelling its animation
  pub fn remove_container(&mut self, id: &str) -> Vec<ScrollContainer> {
    self.animations.remove(id);
    let (removed, kept) = std::mem::take(&mut self.containers)
      .into_iter()
      .partition(|c| c.id() == id);
    self.containers = kept;
    removed
  }

  /// Removes the container at `index` in [`containers`](Self::containers)
  /// order, cancelling any animation on its id
  pub fn remove_container_at(&mut self, index: usize) -> Option<ScrollContainer> {
    if index >= self.containers.len() {
      return None;
    }
    let removed = self.containers.remove(index);
    self.animations.remove(removed.id());
    Some(removed)
  }

  /// The unique live container with `id`
  pub fn container(&self, id: &str) -> Option<&ScrollContainer> {
    self.resolve_target(id).ok().map(|idx| &self.containers[idx])
  }

  /// Mutable access for layout and style updates
  pub fn container_mut(&mut self, id: &str) -> Option<&mut ScrollContainer> {
    let idx = self.resolve_target(id).ok()?;
    Some(&mut self.containers[idx])
  }

  pub fn containers(&self) -> &[ScrollContainer] {
    &self.containers
  }

  /// Programmatic scroll; interrupts any engine animation on the container
  pub fn set_scroll_offset(&mut self, id: &str, offset: Point) -> bool {
    let Ok(idx) = self.resolve_target(id) else {
      return false;
    };
    if self.animations.remove(id).is_some() {
      tracing::trace!(container = id, "programmatic scroll interrupted animation");
    }
    self.containers[idx].set_scroll_offset(offset);
    true
  }

  /// Adds or replaces the invoker with the same id
  pub fn add_invoker(&mut self, invoker: Invoker) -> Option<Invoker> {
    match self.invokers.iter_mut().find(|i| i.id == invoker.id) {
      Some(existing) => Some(std::mem::replace(existing, invoker)),
      None => {
        self.invokers.push(invoker);
        None
      }
    }
  }

  pub fn remove_invoker(&mut self, id: &str) -> Option<Invoker> {
    let idx = self.invokers.iter().position(|i| i.id == id)?;
    Some(self.invokers.remove(idx))
  }

  pub fn invoker(&self, id: &str) -> Option<&Invoker> {
    self.invokers.iter().find(|i| i.id == id)
  }

  pub fn invokers(&self) -> &[Invoker] {
    &self.invokers
  }

  pub fn invokers_for<'a>(&'a self, target_id: &'a str) -> impl Iterator<Item = &'a Invoker> + 'a {
    self
      .invokers
      .iter()
      .filter(move |invoker| invoker.target_id == target_id)
  }

  /// Whether the controls targeting `target_id` span more than one axis
  ///
  /// Under the default policy this means more than one distinct command
  /// targets the container.
  pub fn is_multi_axis(&self, target_id: &str) -> bool {
    match self.engine.config().multi_axis_policy {
      MultiAxisPolicy::DistinctCommands => {
        let commands: BTreeSet<ScrollCommand> =
          self.invokers_for(target_id).map(|i| i.command).collect();
        commands.len() > 1
      }
      MultiAxisPolicy::DistinctAxes => {
        let writing = self
          .container(target_id)
          .map(|c| c.writing())
          .unwrap_or_default();
        let mut axes = self
          .invokers_for(target_id)
          .map(|i| resolve(i.command, &writing).axis);
        match axes.next() {
          Some(first) => axes.any(|axis| axis != first),
          None => false,
        }
      }
    }
  }

  /// Runs `command` against the container with `target_id` at time `now`
  ///
  /// The decision reads the container's current offset, including the
  /// position of an in-flight animation, and replaces that animation.
  pub fn invoke(&mut self, command: ScrollCommand, target_id: &str, now: Duration) -> InvokeOutcome {
    let idx = match self.resolve_target(target_id) {
      Ok(idx) => idx,
      Err(reason) => {
        tracing::debug!(container = target_id, %command, ?reason, "no-op: unresolved target");
        return InvokeOutcome::no_op(reason);
      }
    };

    self.settle_animation(idx, now);
    let outcome = self.engine.invoke(command, &self.containers[idx]);
    let Some(instruction) = outcome.instruction() else {
      return outcome;
    };

    if self.animations.remove(target_id).is_some() {
      tracing::trace!(container = target_id, "superseded in-flight page scroll");
    }

    let duration = self.engine.config().smooth_scroll_duration();
    if instruction.behavior == ScrollBehavior::Smooth && !duration.is_zero() {
      self.animations.insert(
        target_id.to_string(),
        ScrollAnimation::new(
          instruction.axis,
          instruction.from,
          instruction.final_offset,
          now,
          duration,
        ),
      );
    } else {
      self.containers[idx].set_axis_offset(instruction.axis, instruction.final_offset);
    }
    outcome
  }

  /// Runs the command declared by the invoker with `invoker_id`
  pub fn invoke_control(&mut self, invoker_id: &str, now: Duration) -> InvokeOutcome {
    let Some(invoker) = self.invoker(invoker_id) else {
      return InvokeOutcome::no_op(NoOpReason::UnknownInvoker);
    };
    let (command, target) = (invoker.command, invoker.target_id.clone());
    self.invoke(command, &target, now)
  }

  /// Advances animations to `now`; returns how many are still running
  pub fn tick(&mut self, now: Duration) -> usize {
    let ids: Vec<String> = self.animations.keys().cloned().collect();
    for id in ids {
      match self.resolve_target(&id) {
        Ok(idx) => self.settle_animation(idx, now),
        Err(_) => {
          self.animations.remove(&id);
        }
      }
    }
    self.animations.len()
  }

  pub fn is_animating(&self, id: &str) -> bool {
    self.animations.contains_key(id)
  }

  /// The in-flight animation on the container with `id`, if any
  pub fn animation(&self, id: &str) -> Option<&ScrollAnimation> {
    self.animations.get(id)
  }

  /// Announced name for the invoker with `invoker_id`
  pub fn accessible_name(&self, invoker_id: &str) -> Option<String> {
    let invoker = self.invoker(invoker_id)?;
    let container = self.container(&invoker.target_id);
    let multi_axis = self.is_multi_axis(&invoker.target_id);
    Some(self.engine.accessible_name(invoker, container, multi_axis))
  }

  /// True when the invoker's command would not move its target right now
  pub fn is_blocked(&self, invoker_id: &str) -> bool {
    let Some(invoker) = self.invoker(invoker_id) else {
      return true;
    };
    match self.container(&invoker.target_id) {
      Some(container) => self.engine.command_blocked(invoker.command, container),
      None => true,
    }
  }

  /// Presentation state for one control
  pub fn presentation(&self, invoker_id: &str) -> Option<ControlPresentation> {
    let invoker = self.invoker(invoker_id)?;
    let controls = self
      .container(&invoker.target_id)
      .map(|c| c.id().to_string());
    let name = self.accessible_name(invoker_id)?;
    Some(ControlPresentation::new(
      invoker.id.clone(),
      name,
      controls,
      self.is_blocked(invoker_id),
    ))
  }

  /// Presentation state for every control, in insertion order
  pub fn presentations(&self) -> Vec<ControlPresentation> {
    self
      .invokers
      .iter()
      .filter_map(|invoker| self.presentation(&invoker.id))
      .collect()
  }

  fn resolve_target(&self, id: &str) -> Result<usize, NoOpReason> {
    let mut matches = self
      .containers
      .iter()
      .enumerate()
      .filter(|(_, c)| c.id() == id)
      .map(|(idx, _)| idx);
    match (matches.next(), matches.next()) {
      (Some(idx), None) => Ok(idx),
      (None, _) => Err(NoOpReason::UnknownTarget),
      (Some(_), Some(_)) => Err(NoOpReason::AmbiguousTarget),
    }
  }

  /// Writes the sampled animation offset for container `idx`, dropping the
  /// animation once it has finished
  fn settle_animation(&mut self, idx: usize, now: Duration) {
    let id = self.containers[idx].id();
    let Some(anim) = self.animations.get(id).copied() else {
      return;
    };
    let offset = anim.offset_at(now);
    let finished = anim.is_finished(now);
    let container = &mut self.containers[idx];
    container.set_axis_offset(anim.axis, offset);
    if finished {
      let id = container.id().to_string();
      self.animations.remove(&id);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::EngineConfig;
  use crate::geometry::Size;

  fn doc_with_gallery(behavior: ScrollBehavior) -> ScrollDocument {
    let mut doc = ScrollDocument::default();
    doc.insert_container(
      ScrollContainer::new("gallery", Size::new(300.0, 200.0), Size::new(1200.0, 800.0))
        .with_behavior(behavior)
        .with_accessible_name("Gallery"),
    );
    doc
  }

  #[test]
  fn instant_scroll_applies_immediately() {
    let mut doc = doc_with_gallery(ScrollBehavior::Auto);
    let outcome = doc.invoke(ScrollCommand::PageRight, "gallery", Duration::ZERO);
    assert!(!outcome.is_no_op());
    let offset = doc.container("gallery").unwrap().scroll_offset();
    assert!((offset.x - 270.0).abs() < 1e-3);
    assert!(!doc.is_animating("gallery"));
  }

  #[test]
  fn unknown_and_duplicate_targets_are_no_ops() {
    let mut doc = doc_with_gallery(ScrollBehavior::Auto);
    assert_eq!(
      doc.invoke(ScrollCommand::PageRight, "missing", Duration::ZERO),
      InvokeOutcome::no_op(NoOpReason::UnknownTarget)
    );

    doc.insert_container(ScrollContainer::new(
      "gallery",
      Size::new(100.0, 100.0),
      Size::new(500.0, 500.0),
    ));
    assert_eq!(
      doc.invoke(ScrollCommand::PageRight, "gallery", Duration::ZERO),
      InvokeOutcome::no_op(NoOpReason::AmbiguousTarget)
    );
    assert!(doc.container("gallery").is_none());

    assert_eq!(doc.remove_container("gallery").len(), 2);
    assert!(doc.containers().is_empty());
  }

  #[test]
  fn dropping_one_duplicate_makes_id_resolvable_again() {
    let mut doc = doc_with_gallery(ScrollBehavior::Auto);
    doc.insert_container(ScrollContainer::new(
      "gallery",
      Size::new(100.0, 100.0),
      Size::new(500.0, 500.0),
    ));
    assert!(doc.container("gallery").is_none());

    let removed = doc.remove_container_at(1).unwrap();
    assert_eq!(removed.viewport(), Size::new(100.0, 100.0));
    assert!(doc.remove_container_at(5).is_none());

    let outcome = doc.invoke(ScrollCommand::PageRight, "gallery", Duration::ZERO);
    assert!((outcome.instruction().unwrap().final_offset - 270.0).abs() < 1e-3);
  }

  #[test]
  fn smooth_scroll_settles_over_ticks() {
    let mut doc = doc_with_gallery(ScrollBehavior::Smooth);
    doc.invoke(ScrollCommand::PageDown, "gallery", Duration::from_millis(0));
    assert!(doc.is_animating("gallery"));
    assert_eq!(doc.container("gallery").unwrap().scroll_offset().y, 0.0);

    assert_eq!(doc.tick(Duration::from_millis(75)), 1);
    let mid = doc.container("gallery").unwrap().scroll_offset().y;
    assert!(mid > 0.0 && mid < 180.0, "mid = {mid}");

    assert_eq!(doc.tick(Duration::from_millis(150)), 0);
    assert!((doc.container("gallery").unwrap().scroll_offset().y - 180.0).abs() < 1e-3);
  }

  #[test]
  fn second_command_reads_animating_offset_and_supersedes() {
    let mut doc = doc_with_gallery(ScrollBehavior::Smooth);
    doc.invoke(ScrollCommand::PageDown, "gallery", Duration::from_millis(0));
    let outcome = doc.invoke(ScrollCommand::PageDown, "gallery", Duration::from_millis(75));
    let instruction = outcome.instruction().unwrap();
    assert!(instruction.from > 0.0 && instruction.from < 180.0);
    assert!((instruction.final_offset - (instruction.from + 180.0)).abs() < 1e-3);

    let anim = doc.animation("gallery").unwrap();
    assert_eq!(anim.started_at, Duration::from_millis(75));
    assert_eq!(doc.tick(Duration::from_millis(300)), 0);
  }

  #[test]
  fn programmatic_scroll_cancels_animation() {
    let mut doc = doc_with_gallery(ScrollBehavior::Smooth);
    doc.invoke(ScrollCommand::PageRight, "gallery", Duration::ZERO);
    assert!(doc.set_scroll_offset("gallery", Point::new(10.0, 0.0)));
    assert!(!doc.is_animating("gallery"));
    doc.tick(Duration::from_secs(1));
    assert_eq!(doc.container("gallery").unwrap().scroll_offset().x, 10.0);
  }

  #[test]
  fn multi_axis_policies() {
    let mut doc = doc_with_gallery(ScrollBehavior::Auto);
    doc.add_invoker(Invoker::new("prev", ScrollCommand::PageInlineStart, "gallery"));
    assert!(!doc.is_multi_axis("gallery"));
    doc.add_invoker(Invoker::new("next", ScrollCommand::PageInlineEnd, "gallery"));
    assert!(doc.is_multi_axis("gallery"));

    let engine =
      ScrollCommandEngine::new(EngineConfig::default().with_multi_axis_policy(MultiAxisPolicy::DistinctAxes))
        .unwrap();
    let mut doc2 = ScrollDocument::new(engine);
    doc2.insert_container(ScrollContainer::new(
      "gallery",
      Size::new(300.0, 200.0),
      Size::new(1200.0, 800.0),
    ));
    doc2.add_invoker(Invoker::new("prev", ScrollCommand::PageInlineStart, "gallery"));
    doc2.add_invoker(Invoker::new("next", ScrollCommand::PageInlineEnd, "gallery"));
    assert!(!doc2.is_multi_axis("gallery"));
    doc2.add_invoker(Invoker::new("down", ScrollCommand::PageDown, "gallery"));
    assert!(doc2.is_multi_axis("gallery"));
  }

  #[test]
  fn presentation_tracks_boundary_without_disabling() {
    let mut doc = doc_with_gallery(ScrollBehavior::Auto);
    doc.add_invoker(Invoker::new("prev", ScrollCommand::PageLeft, "gallery"));
    let before = doc.presentation("prev").unwrap();
    assert!(before.aria_disabled);
    assert!(before.focusable);
    assert!(!before.disabled);
    assert_eq!(before.controls.as_deref(), Some("gallery"));

    doc.set_scroll_offset("gallery", Point::new(500.0, 0.0));
    assert!(!doc.presentation("prev").unwrap().aria_disabled);
  }

  #[test]
  fn dangling_invoker_is_blocked_and_unlinked() {
    let mut doc = ScrollDocument::default();
    doc.add_invoker(Invoker::new("next", ScrollCommand::PageDown, "nowhere"));
    let p = doc.presentation("next").unwrap();
    assert!(p.aria_disabled);
    assert_eq!(p.controls, None);
    assert_eq!(p.name, "Page down");
    assert_eq!(
      doc.invoke_control("next", Duration::ZERO),
      InvokeOutcome::no_op(NoOpReason::UnknownTarget)
    );
    assert_eq!(
      doc.invoke_control("ghost", Duration::ZERO),
      InvokeOutcome::no_op(NoOpReason::UnknownInvoker)
    );
  }

  #[test]
  fn add_invoker_replaces_same_id() {
    let mut doc = ScrollDocument::default();
    assert!(doc
      .add_invoker(Invoker::new("b", ScrollCommand::PageDown, "a"))
      .is_none());
    let previous = doc.add_invoker(Invoker::new("b", ScrollCommand::PageUp, "a"));
    assert_eq!(previous.unwrap().command, ScrollCommand::PageDown);
    assert_eq!(doc.invokers().len(), 1);
    assert_eq!(doc.remove_invoker("b").unwrap().command, ScrollCommand::PageUp);
  }
}
