//! Engine configuration
//!
//! Policy knobs for paging, boundary detection, smooth scrolling and accessible
//! name composition. Defaults match native page-key behavior: a page is the
//! visible extent minus a 10% overlap.
//!
//! A few values can be overridden from the environment, which is handy when
//! comparing against a reference engine without rebuilding:
//!
//! | Variable                      | Field              |
//! |-------------------------------|--------------------|
//! | `FASTSCROLL_PAGE_OVERLAP`     | `overlap_ratio`    |
//! | `FASTSCROLL_MAX_OVERLAP`      | `max_overlap`      |
//! | `FASTSCROLL_BOUNDARY_EPSILON` | `boundary_epsilon` |
//! | `FASTSCROLL_SMOOTH_MS`        | `smooth_scroll_ms` |

use std::time::Duration;

use serde::Deserialize;

use crate::accessibility::NameLocale;
use crate::error::{ConfigError, Result};

pub const ENV_PAGE_OVERLAP: &str = "FASTSCROLL_PAGE_OVERLAP";
pub const ENV_MAX_OVERLAP: &str = "FASTSCROLL_MAX_OVERLAP";
pub const ENV_BOUNDARY_EPSILON: &str = "FASTSCROLL_BOUNDARY_EPSILON";
pub const ENV_SMOOTH_MS: &str = "FASTSCROLL_SMOOTH_MS";

/// How `multi_axis` is decided for a target container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiAxisPolicy {
  /// More than one distinct command keyword targets the container
  #[default]
  DistinctCommands,
  /// Invokers targeting the container resolve to more than one physical axis
  DistinctAxes,
}

/// Configuration for [`ScrollCommandEngine`](crate::engine::ScrollCommandEngine)
///
/// # Examples
///
/// ```
/// use fastscroll::config::EngineConfig;
///
/// let config = EngineConfig::new().with_overlap_ratio(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
  /// Fraction of the viewport kept visible across a page scroll
  pub overlap_ratio: f32,

  /// Upper bound on the overlap in CSS pixels
  pub max_overlap: Option<f32>,

  /// Tolerance for floating-point settling at the scroll extremes
  pub boundary_epsilon: f32,

  /// Duration of a smooth page scroll in milliseconds
  pub smooth_scroll_ms: u64,

  pub multi_axis_policy: MultiAxisPolicy,

  /// Phrases and separator used when composing accessible names
  pub locale: NameLocale,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      overlap_ratio: 0.1,
      max_overlap: None,
      boundary_epsilon: 0.5,
      smooth_scroll_ms: 150,
      multi_axis_policy: MultiAxisPolicy::DistinctCommands,
      locale: NameLocale::default(),
    }
  }
}

impl EngineConfig {
  /// Creates a new configuration with default values
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a builder starting from the defaults
  pub fn builder() -> EngineConfigBuilder {
    EngineConfigBuilder::new()
  }

  /// Default configuration with `FASTSCROLL_*` overrides applied
  pub fn from_env() -> Self {
    Self::default().with_overrides(|key| std::env::var(key).ok())
  }

  /// Applies overrides from `lookup`, skipping values that do not parse or
  /// would make the configuration invalid
  pub fn with_overrides<F>(mut self, lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(value) = parse_override::<f32>(&lookup, ENV_PAGE_OVERLAP) {
      let candidate = self.clone().with_overlap_ratio(value);
      if candidate.validate().is_ok() {
        self = candidate;
      } else {
        tracing::warn!(value, "ignoring out-of-range {}", ENV_PAGE_OVERLAP);
      }
    }
    if let Some(value) = parse_override::<f32>(&lookup, ENV_MAX_OVERLAP) {
      let candidate = self.clone().with_max_overlap(Some(value));
      if candidate.validate().is_ok() {
        self = candidate;
      } else {
        tracing::warn!(value, "ignoring out-of-range {}", ENV_MAX_OVERLAP);
      }
    }
    if let Some(value) = parse_override::<f32>(&lookup, ENV_BOUNDARY_EPSILON) {
      let candidate = self.clone().with_boundary_epsilon(value);
      if candidate.validate().is_ok() {
        self = candidate;
      } else {
        tracing::warn!(value, "ignoring out-of-range {}", ENV_BOUNDARY_EPSILON);
      }
    }
    if let Some(value) = parse_override::<u64>(&lookup, ENV_SMOOTH_MS) {
      self.smooth_scroll_ms = value;
    }
    self
  }

  pub fn with_overlap_ratio(mut self, ratio: f32) -> Self {
    self.overlap_ratio = ratio;
    self
  }

  pub fn with_max_overlap(mut self, max_overlap: Option<f32>) -> Self {
    self.max_overlap = max_overlap;
    self
  }

  pub fn with_boundary_epsilon(mut self, epsilon: f32) -> Self {
    self.boundary_epsilon = epsilon;
    self
  }

  pub fn with_smooth_scroll_duration(mut self, duration: Duration) -> Self {
    self.smooth_scroll_ms = duration.as_millis().min(u64::MAX as u128) as u64;
    self
  }

  pub fn with_multi_axis_policy(mut self, policy: MultiAxisPolicy) -> Self {
    self.multi_axis_policy = policy;
    self
  }

  pub fn with_locale(mut self, locale: NameLocale) -> Self {
    self.locale = locale;
    self
  }

  pub fn smooth_scroll_duration(&self) -> Duration {
    Duration::from_millis(self.smooth_scroll_ms)
  }

  /// Checks that every knob is in range
  ///
  /// # Errors
  ///
  /// Returns the first out-of-range field found.
  pub fn validate(&self) -> std::result::Result<(), ConfigError> {
    if !(self.overlap_ratio.is_finite() && (0.0..1.0).contains(&self.overlap_ratio)) {
      return Err(ConfigError::OverlapRatioOutOfRange {
        value: self.overlap_ratio,
      });
    }
    if let Some(max) = self.max_overlap {
      if !(max.is_finite() && max >= 0.0) {
        return Err(ConfigError::NegativeMaxOverlap { value: max });
      }
    }
    if !(self.boundary_epsilon.is_finite() && self.boundary_epsilon >= 0.0) {
      return Err(ConfigError::NegativeEpsilon {
        value: self.boundary_epsilon,
      });
    }
    if self.locale.separator.is_empty() {
      return Err(ConfigError::EmptySeparator);
    }
    Ok(())
  }
}

fn parse_override<T: std::str::FromStr>(
  lookup: &impl Fn(&str) -> Option<String>,
  key: &str,
) -> Option<T> {
  let raw = lookup(key)?;
  match raw.trim().parse::<T>() {
    Ok(value) => Some(value),
    Err(_) => {
      tracing::warn!(value = %raw, "ignoring unparsable {}", key);
      None
    }
  }
}

/// Builder for validated [`EngineConfig`] values
///
/// # Examples
///
/// ```
/// use fastscroll::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .overlap_ratio(0.125)
///     .boundary_epsilon(1.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.overlap_ratio, 0.125);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
  config: EngineConfig,
}

impl EngineConfigBuilder {
  pub fn new() -> Self {
    Self {
      config: EngineConfig::default(),
    }
  }

  pub fn overlap_ratio(mut self, ratio: f32) -> Self {
    self.config.overlap_ratio = ratio;
    self
  }

  pub fn max_overlap(mut self, max_overlap: f32) -> Self {
    self.config.max_overlap = Some(max_overlap);
    self
  }

  pub fn boundary_epsilon(mut self, epsilon: f32) -> Self {
    self.config.boundary_epsilon = epsilon;
    self
  }

  pub fn smooth_scroll_duration(mut self, duration: Duration) -> Self {
    self.config = self.config.with_smooth_scroll_duration(duration);
    self
  }

  pub fn multi_axis_policy(mut self, policy: MultiAxisPolicy) -> Self {
    self.config.multi_axis_policy = policy;
    self
  }

  pub fn locale(mut self, locale: NameLocale) -> Self {
    self.config.locale = locale;
    self
  }

  /// Validates and returns the configuration
  pub fn build(self) -> Result<EngineConfig> {
    self.config.validate()?;
    Ok(self.config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn defaults_are_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.overlap_ratio, 0.1);
    assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(150));
  }

  #[test]
  fn builder_rejects_full_overlap() {
    let err = EngineConfig::builder().overlap_ratio(1.0).build().unwrap_err();
    assert!(matches!(
      err,
      crate::Error::Config(ConfigError::OverlapRatioOutOfRange { .. })
    ));
    assert!(EngineConfig::builder().boundary_epsilon(-1.0).build().is_err());
    assert!(EngineConfig::builder().max_overlap(f32::NAN).build().is_err());
  }

  #[test]
  fn overrides_apply_and_skip_bad_values() {
    let config = EngineConfig::default().with_overrides(lookup_from(&[
      (ENV_PAGE_OVERLAP, " 0.25 "),
      (ENV_MAX_OVERLAP, "nope"),
      (ENV_BOUNDARY_EPSILON, "-3"),
      (ENV_SMOOTH_MS, "0"),
    ]));
    assert_eq!(config.overlap_ratio, 0.25);
    assert_eq!(config.max_overlap, None);
    assert_eq!(config.boundary_epsilon, 0.5);
    assert_eq!(config.smooth_scroll_ms, 0);
  }

  #[test]
  fn deserializes_partial_json() {
    let config: EngineConfig =
      serde_json::from_str(r#"{"overlap_ratio": 0.2, "multi_axis_policy": "distinct-axes"}"#)
        .unwrap();
    assert_eq!(config.overlap_ratio, 0.2);
    assert_eq!(config.multi_axis_policy, MultiAxisPolicy::DistinctAxes);
    assert_eq!(config.boundary_epsilon, 0.5);
  }
}
