//! Accessible names and presentation state for page scroll controls
//!
//! A control's announced name is recomputed from the invoker, its target and
//! the document's invoker set on every query. Nothing here is cached, so a
//! renamed container or a newly added sibling control is reflected on the next
//! read.

use serde::{Deserialize, Serialize};

use crate::command::{resolve, CommandEdge, ScrollCommand};
use crate::container::ScrollContainer;
use crate::geometry::Axis;
use crate::invoker::Invoker;

/// Localizable phrases used to compose control names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameLocale {
  /// Joins the action, axis and target segments
  pub separator: String,
  pub page_up: String,
  pub page_down: String,
  pub page_left: String,
  pub page_right: String,
  pub previous_page: String,
  pub next_page: String,
  pub horizontal: String,
  pub vertical: String,
}

impl Default for NameLocale {
  fn default() -> Self {
    Self {
      separator: ", ".to_string(),
      page_up: "Page up".to_string(),
      page_down: "Page down".to_string(),
      page_left: "Page left".to_string(),
      page_right: "Page right".to_string(),
      previous_page: "Previous page".to_string(),
      next_page: "Next page".to_string(),
      horizontal: "horizontal".to_string(),
      vertical: "vertical".to_string(),
    }
  }
}

impl NameLocale {
  /// Phrase describing what activating the control does
  pub fn action_phrase(&self, command: ScrollCommand) -> &str {
    match command {
      ScrollCommand::PageUp => &self.page_up,
      ScrollCommand::PageDown => &self.page_down,
      ScrollCommand::PageLeft => &self.page_left,
      ScrollCommand::PageRight => &self.page_right,
      _ => match command.edge() {
        CommandEdge::Start => &self.previous_page,
        CommandEdge::End => &self.next_page,
      },
    }
  }

  pub fn axis_word(&self, axis: Axis) -> &str {
    match axis {
      Axis::Horizontal => &self.horizontal,
      Axis::Vertical => &self.vertical,
    }
  }
}

/// Composes the announced name for `invoker`
///
/// An explicit label wins verbatim. Otherwise the name is the action phrase,
/// then the physical axis when `multi_axis` is set, then the container's
/// accessible name when it has one.
///
/// # Examples
///
/// ```
/// use fastscroll::accessibility::{compose_name, NameLocale};
/// use fastscroll::{Invoker, ScrollCommand, ScrollContainer, Size};
///
/// let gallery = ScrollContainer::new("g", Size::new(300.0, 200.0), Size::new(900.0, 200.0))
///     .with_accessible_name("Gallery");
/// let next = Invoker::new("next", ScrollCommand::PageInlineEnd, "g");
/// let locale = NameLocale::default();
/// assert_eq!(compose_name(&next, Some(&gallery), false, &locale), "Next page, Gallery");
/// assert_eq!(
///     compose_name(&next, Some(&gallery), true, &locale),
///     "Next page, horizontal, Gallery"
/// );
/// ```
pub fn compose_name(
  invoker: &Invoker,
  container: Option<&ScrollContainer>,
  multi_axis: bool,
  locale: &NameLocale,
) -> String {
  if let Some(label) = invoker.label() {
    return label.to_string();
  }

  let mut segments: Vec<String> = Vec::with_capacity(3);
  segments.push(locale.action_phrase(invoker.command).to_string());

  if let Some(container) = container {
    if multi_axis {
      let axis = resolve(invoker.command, &container.writing()).axis;
      segments.push(locale.axis_word(axis).to_string());
    }
    let target_name = container
      .accessible_name()
      .map(normalize_whitespace)
      .unwrap_or_default();
    if !target_name.is_empty() {
      segments.push(target_name);
    }
  }

  segments
    .into_iter()
    .filter(|segment| !segment.trim().is_empty())
    .collect::<Vec<_>>()
    .join(&locale.separator)
}

/// State handed to the presentation layer for one control
///
/// `disabled` is always false and `focusable` always true; a control whose
/// command cannot move its target is exposed through `aria_disabled` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPresentation {
  pub invoker_id: String,
  pub name: String,
  /// Implicit `aria-controls` target, when the target resolves
  #[serde(skip_serializing_if = "Option::is_none")]
  pub controls: Option<String>,
  pub focusable: bool,
  pub disabled: bool,
  pub aria_disabled: bool,
}

impl ControlPresentation {
  pub fn new(invoker_id: impl Into<String>, name: String, controls: Option<String>, blocked: bool) -> Self {
    Self {
      invoker_id: invoker_id.into(),
      name,
      controls,
      focusable: true,
      disabled: false,
      aria_disabled: blocked,
    }
  }
}

pub(crate) fn normalize_whitespace(input: &str) -> String {
  let mut out = String::new();
  let mut last_space = false;
  for ch in input.chars() {
    if matches!(ch, '\u{200B}' | '\u{FEFF}' | '\u{2060}') {
      continue;
    }

    if ch.is_whitespace() {
      if !last_space {
        out.push(' ');
      }
      last_space = true;
    } else {
      out.push(ch);
      last_space = false;
    }
  }
  out.trim().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Size;
  use crate::style::WritingContext;

  fn gallery(name: Option<&str>) -> ScrollContainer {
    let c = ScrollContainer::new("g", Size::new(300.0, 200.0), Size::new(900.0, 600.0));
    match name {
      Some(name) => c.with_accessible_name(name),
      None => c,
    }
  }

  #[test]
  fn explicit_label_is_used_verbatim() {
    let invoker = Invoker::new("b", ScrollCommand::PageDown, "g").with_label("  More  photos ");
    let name = compose_name(&invoker, Some(&gallery(Some("Gallery"))), true, &NameLocale::default());
    assert_eq!(name, "  More  photos ");
  }

  #[test]
  fn blank_label_falls_back_to_composition() {
    let invoker = Invoker::new("b", ScrollCommand::PageDown, "g").with_label("   ");
    let name = compose_name(&invoker, Some(&gallery(Some("Gallery"))), false, &NameLocale::default());
    assert_eq!(name, "Page down, Gallery");
  }

  #[test]
  fn missing_target_name_leaves_no_dangling_separator() {
    let invoker = Invoker::new("b", ScrollCommand::PageBlockStart, "g");
    let locale = NameLocale::default();
    assert_eq!(compose_name(&invoker, Some(&gallery(None)), false, &locale), "Previous page");
    assert_eq!(
      compose_name(&invoker, Some(&gallery(Some(" \u{200B} "))), true, &locale),
      "Previous page, vertical"
    );
    assert_eq!(compose_name(&invoker, None, true, &locale), "Previous page");
  }

  #[test]
  fn axis_qualifier_follows_writing_mode() {
    let vertical_rl = gallery(Some("Story")).with_writing(WritingContext::new(false, true).with_block_reversed(true));
    let invoker = Invoker::new("b", ScrollCommand::PageBlockEnd, "g");
    assert_eq!(
      compose_name(&invoker, Some(&vertical_rl), true, &NameLocale::default()),
      "Next page, horizontal, Story"
    );
  }

  #[test]
  fn locale_overrides_phrases_and_separator() {
    let locale = NameLocale {
      separator: " · ".to_string(),
      next_page: "Page suivante".to_string(),
      horizontal: "horizontale".to_string(),
      ..NameLocale::default()
    };
    let invoker = Invoker::new("b", ScrollCommand::PageInlineEnd, "g");
    assert_eq!(
      compose_name(&invoker, Some(&gallery(Some("Galerie"))), true, &locale),
      "Page suivante · horizontale · Galerie"
    );
  }

  #[test]
  fn target_name_whitespace_is_collapsed() {
    let invoker = Invoker::new("b", ScrollCommand::PageRight, "g");
    assert_eq!(
      compose_name(&invoker, Some(&gallery(Some("Photo\n  gallery"))), false, &NameLocale::default()),
      "Page right, Photo gallery"
    );
  }

  #[test]
  fn presentation_serializes_flags() {
    let p = ControlPresentation::new("b", "Next page".to_string(), Some("g".to_string()), true);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["aria_disabled"], true);
    assert_eq!(json["disabled"], false);
    assert_eq!(json["focusable"], true);
    assert_eq!(json["controls"], "g");
  }
}
