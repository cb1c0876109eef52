//! JSON scenarios for replaying page scroll interactions
//!
//! A scenario declares containers, invokers and a list of steps. Replaying it
//! builds a [`ScrollDocument`], runs each step in order and records what every
//! step did together with the control states afterwards. The `page_scroll`
//! binary is a thin wrapper around [`Scenario::replay`].
//!
//! ```json
//! {
//!   "containers": [
//!     { "id": "gallery", "viewport": { "width": 300, "height": 200 },
//!       "content": { "width": 1200, "height": 200 }, "name": "Gallery" }
//!   ],
//!   "invokers": [
//!     { "id": "next", "command": "page-inline-end", "target_id": "gallery" }
//!   ],
//!   "steps": [ { "action": "activate", "invoker": "next" } ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accessibility::ControlPresentation;
use crate::command::ScrollCommand;
use crate::config::EngineConfig;
use crate::container::{ScrollContainer, SnapArea, SnapPoint};
use crate::document::ScrollDocument;
use crate::engine::{InvokeOutcome, ScrollCommandEngine};
use crate::error::{Result, ScenarioError};
use crate::geometry::{EdgeOffsets, Point, Size};
use crate::invoker::Invoker;
use crate::style::{Direction, ScrollBehavior, WritingContext, WritingMode};

/// A declared scroll container
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerSpec {
  pub id: String,
  pub viewport: Size,
  pub content: Size,
  #[serde(default)]
  pub offset: Point,
  #[serde(default)]
  pub writing_mode: WritingMode,
  #[serde(default)]
  pub direction: Direction,
  #[serde(default)]
  pub behavior: ScrollBehavior,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub scroll_padding: EdgeOffsets,
  #[serde(default)]
  pub snap_points: Vec<SnapPoint>,
  #[serde(default)]
  pub snap_areas: Vec<SnapArea>,
}

impl ContainerSpec {
  fn build(&self) -> ScrollContainer {
    let mut container = ScrollContainer::new(self.id.clone(), self.viewport, self.content)
      .with_writing(WritingContext::from_style(self.writing_mode, self.direction))
      .with_behavior(self.behavior)
      .with_scroll_padding(self.scroll_padding);
    if let Some(name) = &self.name {
      container = container.with_accessible_name(name.clone());
    }
    if !self.snap_areas.is_empty() {
      container = container.with_snap_areas(self.snap_areas.clone());
    }
    if !self.snap_points.is_empty() {
      container = container.with_snap_points(self.snap_points.iter().copied());
    }
    container.with_scroll_offset(self.offset)
  }
}

/// One scripted interaction. `at_ms` is the monotonic time of the step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
  /// Activate a declared invoker
  Activate {
    invoker: String,
    #[serde(default)]
    at_ms: u64,
  },
  /// Run a command keyword directly against a target id
  Command {
    command: String,
    target: String,
    #[serde(default)]
    at_ms: u64,
  },
  /// Advance animations
  Tick { at_ms: u64 },
  /// Programmatic scroll, e.g. user wheel input
  SetOffset { target: String, offset: Point },
}

/// A complete scenario file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
  pub config: EngineConfig,
  pub containers: Vec<ContainerSpec>,
  pub invokers: Vec<Invoker>,
  pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerOffset {
  pub id: String,
  pub offset: Point,
  pub animating: bool,
}

/// What one step did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
  pub step: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outcome: Option<InvokeOutcome>,
  pub offsets: Vec<ContainerOffset>,
  pub controls: Vec<ControlPresentation>,
}

/// Result of [`Scenario::replay`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
  /// Control states before the first step
  pub initial: Vec<ControlPresentation>,
  pub steps: Vec<StepReport>,
}

impl Scenario {
  pub fn from_json(input: &str) -> Result<Self> {
    let scenario = serde_json::from_str(input).map_err(ScenarioError::from)?;
    Ok(scenario)
  }

  /// Reads and parses a scenario file
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let input = fs::read_to_string(path)?;
    Self::from_json(&input)
  }

  /// Replaces the configuration, e.g. after applying environment overrides
  pub fn with_config(mut self, config: EngineConfig) -> Self {
    self.config = config;
    self
  }

  /// Checks invoker ids and parses every step's command keyword
  pub fn validate(&self) -> Result<()> {
    let mut seen = HashSet::new();
    for invoker in &self.invokers {
      if !seen.insert(invoker.id.as_str()) {
        return Err(ScenarioError::DuplicateInvoker { id: invoker.id.clone() }.into());
      }
    }
    for (step, entry) in self.steps.iter().enumerate() {
      match entry {
        Step::Activate { invoker, .. } if !seen.contains(invoker.as_str()) => {
          return Err(ScenarioError::UnknownInvoker { step, id: invoker.clone() }.into());
        }
        Step::Command { command, .. } => {
          parse_command(step, command)?;
        }
        _ => {}
      }
    }
    Ok(())
  }

  /// Builds the document described by the scenario, before any step runs
  pub fn build_document(&self) -> Result<ScrollDocument> {
    self.validate()?;
    let engine = ScrollCommandEngine::new(self.config.clone())?;
    let mut document = ScrollDocument::new(engine);
    for spec in &self.containers {
      document.insert_container(spec.build());
    }
    for invoker in &self.invokers {
      document.add_invoker(invoker.clone());
    }
    Ok(document)
  }

  /// Runs every step and reports the outcome of each
  pub fn replay(&self) -> Result<ScenarioReport> {
    let mut document = self.build_document()?;
    let initial = document.presentations();
    let mut steps = Vec::with_capacity(self.steps.len());

    for (index, step) in self.steps.iter().enumerate() {
      let outcome = match step {
        Step::Activate { invoker, at_ms } => {
          Some(document.invoke_control(invoker, Duration::from_millis(*at_ms)))
        }
        Step::Command {
          command,
          target,
          at_ms,
        } => {
          let command = parse_command(index, command)?;
          Some(document.invoke(command, target, Duration::from_millis(*at_ms)))
        }
        Step::Tick { at_ms } => {
          document.tick(Duration::from_millis(*at_ms));
          None
        }
        Step::SetOffset { target, offset } => {
          if !document.set_scroll_offset(target, *offset) {
            tracing::warn!(step = index, container = target.as_str(), "set-offset target did not resolve");
          }
          None
        }
      };
      tracing::debug!(step = index, ?outcome, "scenario step");
      steps.push(StepReport {
        step: index,
        outcome,
        offsets: offsets(&document),
        controls: document.presentations(),
      });
    }

    Ok(ScenarioReport { initial, steps })
  }
}

fn parse_command(step: usize, keyword: &str) -> Result<ScrollCommand> {
  keyword
    .parse::<ScrollCommand>()
    .map_err(|source| ScenarioError::Command { step, source }.into())
}

fn offsets(document: &ScrollDocument) -> Vec<ContainerOffset> {
  document
    .containers()
    .iter()
    .map(|c| ContainerOffset {
      id: c.id().to_string(),
      offset: c.scroll_offset(),
      animating: document.is_animating(c.id()),
    })
    .collect()
}
