//! Style type definitions
//!
//! The subset of computed style values the scroll command engine consumes.
//! Keyword spellings follow CSS so scenario files and the layout collaborator
//! can pass them through unchanged.

use serde::{Deserialize, Serialize};

/// Text direction
///
/// CSS: `direction`
/// Reference: CSS Writing Modes Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  #[default]
  Ltr,
  Rtl,
}

/// Writing mode for block/inline axis orientation
///
/// CSS: `writing-mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritingMode {
  #[default]
  HorizontalTb,
  VerticalRl,
  VerticalLr,
  SidewaysRl,
  SidewaysLr,
}

impl WritingMode {
  /// True when lines run vertically (the inline axis is physical y)
  pub fn is_vertical(self) -> bool {
    matches!(
      self,
      WritingMode::VerticalRl
        | WritingMode::VerticalLr
        | WritingMode::SidewaysRl
        | WritingMode::SidewaysLr
    )
  }
}

/// Scroll-behavior property
///
/// Carried on scroll instructions as the animation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
  #[default]
  Auto,
  Smooth,
}

/// Scroll snap alignment per axis
///
/// CSS: `scroll-snap-align`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSnapAlign {
  #[default]
  None,
  Start,
  End,
  Center,
}

/// CSS `scroll-snap-align` for both logical axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollSnapAlignments {
  #[serde(default)]
  pub inline: ScrollSnapAlign,
  #[serde(default)]
  pub block: ScrollSnapAlign,
}

/// CSS `scroll-snap-stop`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSnapStop {
  #[default]
  Normal,
  Always,
}
