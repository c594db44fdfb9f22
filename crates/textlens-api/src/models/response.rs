//! Response Model Definition

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use textlens::TextAnalysis;

use crate::config::SERVICE_NAME;

/// Formats a UTC instant as RFC 3339 with microseconds and a `Z` suffix.
///
/// e.g. `2026-10-19T08:30:00.123456Z`
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Text Analysis Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeResponse {
  /// Input text, unchanged
  pub original_text: String,
  /// Number of whitespace-separated words
  pub word_count: usize,
  /// Number of Unicode code points
  pub character_count: usize,
  /// Time the request was processed (RFC 3339, UTC)
  pub analysis_timestamp: String,
}

impl AnalyzeResponse {
  /// Builds a response from the input text and its analysis
  #[must_use]
  pub fn new(original_text: String, analysis: TextAnalysis, at: DateTime<Utc>) -> Self {
    Self {
      original_text,
      word_count: analysis.word_count,
      character_count: analysis.character_count,
      analysis_timestamp: format_timestamp(at),
    }
  }

  /// The deterministic part of the response
  #[must_use]
  pub fn analysis(&self) -> TextAnalysis {
    TextAnalysis {
      word_count: self.word_count,
      character_count: self.character_count,
    }
  }
}

/// Liveness/readiness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// Always "ok"
  pub status: &'static str,
}

impl HealthResponse {
  /// The fixed healthy response
  #[must_use]
  pub fn ok() -> Self {
    Self { status: "ok" }
  }
}

/// Service status returned from `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
  /// Always "healthy"
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
  /// Crate version
  pub version: &'static str,
  /// Current time (RFC 3339, UTC)
  pub timestamp: String,
}

impl ServiceStatus {
  /// Status snapshot at the given instant
  #[must_use]
  pub fn healthy(at: DateTime<Utc>) -> Self {
    Self {
      status: "healthy",
      service: SERVICE_NAME,
      version: env!("CARGO_PKG_VERSION"),
      timestamp: format_timestamp(at),
    }
  }
}
