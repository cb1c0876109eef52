//! Button-like controls that carry a page command

use serde::{Deserialize, Serialize};

use crate::command::ScrollCommand;

/// A control declaring `command` against the container whose id is `target_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoker {
  pub id: String,
  pub command: ScrollCommand,
  pub target_id: String,
  /// Author-supplied label (`aria-label` or text content)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explicit_label: Option<String>,
}

impl Invoker {
  pub fn new(id: impl Into<String>, command: ScrollCommand, target_id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      command,
      target_id: target_id.into(),
      explicit_label: None,
    }
  }

  pub fn with_label(mut self, label: impl Into<String>) -> Self {
    self.explicit_label = Some(label.into());
    self
  }

  /// The explicit label, unless it is missing or blank
  pub fn label(&self) -> Option<&str> {
    self
      .explicit_label
      .as_deref()
      .filter(|label| !label.trim().is_empty())
  }
}
