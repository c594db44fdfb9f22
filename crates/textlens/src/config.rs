// crates/textlens/src/config.rs

use serde::Deserialize;

use crate::errors::ConfigError;

/// Configuration for [`TextAnalyzer`](crate::analyzer::TextAnalyzer).
///
/// Deserializable so that a host application can embed it in its own config file:
///
/// ```toml
/// [analyzer]
/// max_characters = 10000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalyzerConfig {
  /// Maximum accepted input length, in Unicode code points.
  ///
  /// `None` (or omitted in TOML) means no limit.
  #[serde(default)]
  pub max_characters: Option<usize>,
}

impl AnalyzerConfig {
  /// Creates a configuration with the given character limit.
  #[must_use]
  pub fn with_max_characters(max_characters: usize) -> Self {
    Self {
      max_characters: Some(max_characters),
    }
  }

  /// Returns the configured character limit, if any.
  pub fn max_characters(&self) -> Option<usize> {
    self.max_characters
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `max_characters` >= 1 when set
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(actual) = self.max_characters
      && actual < 1
    {
      return Err(ConfigError::InvalidMaxCharacters { actual });
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_unbounded_and_valid() {
    let config = AnalyzerConfig::default();
    assert_eq!(config.max_characters(), None);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn zero_limit_is_rejected() {
    let config = AnalyzerConfig::with_max_characters(0);
    assert_eq!(
      config.validate(),
      Err(ConfigError::InvalidMaxCharacters { actual: 0 })
    );
  }

  #[test]
  fn deserialize_from_json() {
    let config: AnalyzerConfig = serde_json::from_str(r#"{"max_characters": 42}"#).unwrap();
    assert_eq!(config.max_characters(), Some(42));

    let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.max_characters(), None);
  }
}
