//! Page scroll command keywords and direction resolution
//!
//! A command names a direction either physically (`page-up`, `page-left`, ...)
//! or relative to text flow (`page-block-end`, `page-inline-start`, ...).
//! [`resolve`] maps it to a physical axis and sign for the target's current
//! [`WritingContext`]. The mapping is recomputed on every invocation because a
//! container's writing mode can change between invocations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandParseError;
use crate::geometry::{Axis, Sign};
use crate::style::WritingContext;

/// A page scroll command carried by an invoking control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollCommand {
  PageUp,
  PageDown,
  PageLeft,
  PageRight,
  PageBlockStart,
  PageBlockEnd,
  PageInlineStart,
  PageInlineEnd,
}

/// Which end of an axis a command travels toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEdge {
  Start,
  End,
}

impl ScrollCommand {
  pub const ALL: [ScrollCommand; 8] = [
    ScrollCommand::PageUp,
    ScrollCommand::PageDown,
    ScrollCommand::PageLeft,
    ScrollCommand::PageRight,
    ScrollCommand::PageBlockStart,
    ScrollCommand::PageBlockEnd,
    ScrollCommand::PageInlineStart,
    ScrollCommand::PageInlineEnd,
  ];

  /// The canonical attribute keyword
  pub fn as_str(self) -> &'static str {
    match self {
      ScrollCommand::PageUp => "page-up",
      ScrollCommand::PageDown => "page-down",
      ScrollCommand::PageLeft => "page-left",
      ScrollCommand::PageRight => "page-right",
      ScrollCommand::PageBlockStart => "page-block-start",
      ScrollCommand::PageBlockEnd => "page-block-end",
      ScrollCommand::PageInlineStart => "page-inline-start",
      ScrollCommand::PageInlineEnd => "page-inline-end",
    }
  }

  /// True for block/inline commands whose axis depends on writing mode
  pub fn is_logical(self) -> bool {
    matches!(
      self,
      ScrollCommand::PageBlockStart
        | ScrollCommand::PageBlockEnd
        | ScrollCommand::PageInlineStart
        | ScrollCommand::PageInlineEnd
    )
  }

  pub fn edge(self) -> CommandEdge {
    match self {
      ScrollCommand::PageUp
      | ScrollCommand::PageLeft
      | ScrollCommand::PageBlockStart
      | ScrollCommand::PageInlineStart => CommandEdge::Start,
      ScrollCommand::PageDown
      | ScrollCommand::PageRight
      | ScrollCommand::PageBlockEnd
      | ScrollCommand::PageInlineEnd => CommandEdge::End,
    }
  }
}

impl fmt::Display for ScrollCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ScrollCommand {
  type Err = CommandParseError;

  /// Parses an attribute value, ASCII case-insensitively
  ///
  /// # Examples
  ///
  /// ```
  /// use fastscroll::ScrollCommand;
  ///
  /// let cmd: ScrollCommand = " Page-Inline-End ".parse().unwrap();
  /// assert_eq!(cmd, ScrollCommand::PageInlineEnd);
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let keyword = s.trim();
    if keyword.is_empty() {
      return Err(CommandParseError::Empty);
    }
    ScrollCommand::ALL
      .iter()
      .copied()
      .find(|cmd| cmd.as_str().eq_ignore_ascii_case(keyword))
      .ok_or_else(|| CommandParseError::UnknownKeyword {
        keyword: keyword.to_string(),
      })
  }
}

/// Physical axis and direction of travel for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedDirection {
  pub axis: Axis,
  pub sign: Sign,
}

impl ResolvedDirection {
  pub const fn new(axis: Axis, sign: Sign) -> Self {
    Self { axis, sign }
  }
}

/// Maps a command to a physical axis and sign in `writing`
///
/// # Examples
///
/// ```
/// use fastscroll::command::resolve;
/// use fastscroll::style::WritingContext;
/// use fastscroll::{Axis, ScrollCommand, Sign};
///
/// let rtl = WritingContext::new(true, false);
/// let dir = resolve(ScrollCommand::PageInlineEnd, &rtl);
/// assert_eq!((dir.axis, dir.sign), (Axis::Horizontal, Sign::Negative));
/// ```
pub fn resolve(command: ScrollCommand, writing: &WritingContext) -> ResolvedDirection {
  match command {
    ScrollCommand::PageUp => ResolvedDirection::new(Axis::Vertical, Sign::Negative),
    ScrollCommand::PageDown => ResolvedDirection::new(Axis::Vertical, Sign::Positive),
    ScrollCommand::PageLeft => ResolvedDirection::new(Axis::Horizontal, Sign::Negative),
    ScrollCommand::PageRight => ResolvedDirection::new(Axis::Horizontal, Sign::Positive),
    ScrollCommand::PageBlockStart | ScrollCommand::PageBlockEnd => {
      let start = Sign::Negative.reversed_if(writing.block_is_reversed);
      ResolvedDirection::new(writing.block_axis(), logical_sign(command, start))
    }
    ScrollCommand::PageInlineStart | ScrollCommand::PageInlineEnd => {
      let start = if writing.inline_is_left_to_right {
        Sign::Negative
      } else {
        Sign::Positive
      };
      ResolvedDirection::new(writing.inline_axis(), logical_sign(command, start))
    }
  }
}

fn logical_sign(command: ScrollCommand, start: Sign) -> Sign {
  match command.edge() {
    CommandEdge::Start => start,
    CommandEdge::End => start.flip(),
  }
}
