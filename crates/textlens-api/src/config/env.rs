//! Config loading from environment variables

use std::str::FromStr;

use textlens::AnalyzerConfig;

use super::constants::{
  DEFAULT_BIND_HOST, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_LOG_LEVEL, DEFAULT_MAX_TEXT_CHARS,
  DEFAULT_PORT,
};
use crate::errors::ApiError;

/// Full bind address, e.g. "127.0.0.1:8080". Takes precedence over `PORT`.
pub const ENV_BIND_ADDR: &str = "TEXTLENS_BIND_ADDR";
/// Port injected by the container platform.
pub const ENV_PORT: &str = "PORT";
/// Maximum text length in code points.
pub const ENV_MAX_TEXT_CHARS: &str = "TEXTLENS_MAX_TEXT_CHARS";
/// Maximum request body size in bytes.
pub const ENV_BODY_LIMIT_BYTES: &str = "TEXTLENS_BODY_LIMIT_BYTES";
/// Log level filter used when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8000")
  pub bind_addr: String,
  /// Maximum text length in Unicode code points
  pub max_text_chars: usize,
  /// Maximum request body size in bytes
  pub body_limit_bytes: usize,
  /// Log level filter (e.g. "info", "debug,tower_http=trace")
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: format!("{DEFAULT_BIND_HOST}:{DEFAULT_PORT}"),
      max_text_chars: DEFAULT_MAX_TEXT_CHARS,
      body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
      log_level: DEFAULT_LOG_LEVEL.to_string(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a closure over a map instead of
  /// mutating the process environment.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed or a limit is zero
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let bind_addr = match (lookup(ENV_BIND_ADDR), lookup(ENV_PORT)) {
      (Some(addr), _) => addr,
      (None, Some(port)) => {
        let port: u16 = parse_var(ENV_PORT, &port)?;
        format!("{DEFAULT_BIND_HOST}:{port}")
      }
      (None, None) => defaults.bind_addr,
    };

    let max_text_chars = match lookup(ENV_MAX_TEXT_CHARS) {
      Some(value) => parse_positive(ENV_MAX_TEXT_CHARS, &value)?,
      None => defaults.max_text_chars,
    };

    let body_limit_bytes = match lookup(ENV_BODY_LIMIT_BYTES) {
      Some(value) => parse_positive(ENV_BODY_LIMIT_BYTES, &value)?,
      None => defaults.body_limit_bytes,
    };

    let log_level = lookup(ENV_LOG_LEVEL).unwrap_or(defaults.log_level);

    Ok(Self {
      bind_addr,
      max_text_chars,
      body_limit_bytes,
      log_level,
    })
  }

  /// Analyzer configuration derived from this server configuration
  #[must_use]
  pub fn analyzer_config(&self) -> AnalyzerConfig {
    AnalyzerConfig::with_max_characters(self.max_text_chars)
  }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> crate::errors::Result<T>
where
  T::Err: std::fmt::Display,
{
  value
    .trim()
    .parse()
    .map_err(|e| ApiError::config(format!("{key}={value:?} is invalid: {e}")))
}

fn parse_positive(key: &str, value: &str) -> crate::errors::Result<usize> {
  let parsed: usize = parse_var(key, value)?;
  if parsed == 0 {
    return Err(ApiError::config(format!("{key} must be at least 1")));
  }
  Ok(parsed)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn load(vars: &[(&str, &str)]) -> crate::errors::Result<Config> {
    let map: HashMap<String, String> =
      vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_lookup(|key| map.get(key).cloned())
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = load(&[]).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8000");
    assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    assert_eq!(config.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    assert_eq!(config.log_level, "info");
  }

  #[test]
  fn port_sets_bind_addr() {
    let config = load(&[("PORT", "8080")]).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
  }

  #[test]
  fn bind_addr_wins_over_port() {
    let config = load(&[("PORT", "8080"), ("TEXTLENS_BIND_ADDR", "127.0.0.1:9000")]).unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
  }

  #[test]
  fn invalid_port_is_config_error() {
    let err = load(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn limits_are_parsed() {
    let config = load(&[
      ("TEXTLENS_MAX_TEXT_CHARS", "500"),
      ("TEXTLENS_BODY_LIMIT_BYTES", "4096"),
    ])
    .unwrap();
    assert_eq!(config.max_text_chars, 500);
    assert_eq!(config.body_limit_bytes, 4096);
    assert_eq!(config.analyzer_config().max_characters(), Some(500));
  }

  #[test]
  fn zero_limit_is_config_error() {
    assert!(load(&[("TEXTLENS_MAX_TEXT_CHARS", "0")]).is_err());
    assert!(load(&[("TEXTLENS_BODY_LIMIT_BYTES", "0")]).is_err());
  }

  #[test]
  fn config_from_env_defaults() {
    // Note: set_var/remove_var are unsafe in Rust 2024, so the process
    // environment is only read here. Values may come from the caller's shell.
    let config = Config::from_env();
    if let Ok(config) = config {
      assert!(!config.bind_addr.is_empty());
    }
  }
}
