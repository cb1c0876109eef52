//! Error types for fastscroll
//!
//! The engine's own operations are total: an invocation that cannot scroll
//! reports a no-op outcome instead of an error. Errors only arise at the edges:
//! - Command keyword parsing (the attribute layer)
//! - Engine configuration validation
//! - Scenario loading for the `page_scroll` tool
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for fastscroll operations
///
/// # Examples
///
/// ```
/// use fastscroll::Result;
///
/// fn load() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fastscroll
#[derive(Error, Debug)]
pub enum Error {
  /// A command keyword was not one of the eight page commands
  #[error("Command error: {0}")]
  CommandParse(#[from] CommandParseError),

  /// Engine configuration is out of range
  #[error("Config error: {0}")]
  Config(#[from] ConfigError),

  /// A scenario file could not be loaded or replayed
  #[error("Scenario error: {0}")]
  Scenario(#[from] ScenarioError),

  /// I/O error (reading scenario files)
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Errors produced while parsing a `command` attribute value
///
/// # Examples
///
/// ```
/// use fastscroll::ScrollCommand;
/// use fastscroll::error::CommandParseError;
///
/// let err = "page-sideways".parse::<ScrollCommand>().unwrap_err();
/// assert!(matches!(err, CommandParseError::UnknownKeyword { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
  /// Attribute present but empty
  #[error("Empty command keyword")]
  Empty,

  /// Keyword is not a page scroll command
  #[error("Unknown scroll command keyword: {keyword}")]
  UnknownKeyword { keyword: String },
}

/// Errors produced by [`EngineConfig::validate`](crate::config::EngineConfig::validate)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
  /// Overlap must leave a positive page
  #[error("Overlap ratio must be within [0, 1), got {value}")]
  OverlapRatioOutOfRange { value: f32 },

  /// Overlap cap in pixels must be finite and non-negative
  #[error("Maximum overlap must be a non-negative length, got {value}")]
  NegativeMaxOverlap { value: f32 },

  /// Boundary tolerance must be finite and non-negative
  #[error("Boundary epsilon must be a non-negative length, got {value}")]
  NegativeEpsilon { value: f32 },

  /// Name separator would glue segments together
  #[error("Accessible name separator must not be empty")]
  EmptySeparator,
}

/// Errors produced while replaying a scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
  /// Scenario JSON is malformed
  #[error("Invalid scenario JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// Two invokers share an id
  #[error("Duplicate invoker id '{id}'")]
  DuplicateInvoker { id: String },

  /// A step names an invoker that was never declared
  #[error("Step {step} references unknown invoker '{id}'")]
  UnknownInvoker { step: usize, id: String },

  /// A step names a command keyword the attribute layer rejects
  #[error("Step {step}: {source}")]
  Command {
    step: usize,
    #[source]
    source: CommandParseError,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_display_wraps_subsystem_message() {
    let err = Error::from(CommandParseError::UnknownKeyword {
      keyword: "page-over".to_string(),
    });
    assert_eq!(
      err.to_string(),
      "Command error: Unknown scroll command keyword: page-over"
    );

    let err = Error::from(ConfigError::OverlapRatioOutOfRange { value: 1.5 });
    assert!(err.to_string().contains("[0, 1)"));
  }
}
