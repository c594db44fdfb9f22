//! Text Analysis Service

use chrono::Utc;
use textlens::TextAnalyzer;

use crate::config::Config;
use crate::errors::Result;
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Common interface for the text analysis service
///
/// This trait allows swapping the production implementation (`TextAnalyzerService`) with
/// test stubs/mocks.
pub trait AnalyzerApiService: Send + Sync {
  /// Analyzes the request text
  ///
  /// # Errors
  /// - Text exceeds the configured maximum length
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Text Analysis Service
///
/// Wraps an immutable `TextAnalyzer`; cloning is cheap and shares nothing mutable.
#[derive(Debug, Clone)]
pub struct TextAnalyzerService {
  analyzer: TextAnalyzer,
}

impl TextAnalyzerService {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including the text length limit)
  ///
  /// # Errors
  /// Returns an error if the analyzer configuration is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let analyzer = TextAnalyzer::new(&config.analyzer_config())?;
    Ok(Self { analyzer })
  }

  /// Builds the service around an existing analyzer
  #[must_use]
  pub fn with_analyzer(analyzer: TextAnalyzer) -> Self {
    Self { analyzer }
  }

  /// Executes the analysis
  ///
  /// # Arguments
  /// * `request` - Analysis request
  ///
  /// # Returns
  /// Counts, the echoed text and the processing timestamp
  ///
  /// # Errors
  /// - If text exceeds maximum length
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let analysis = self.analyzer.analyze(&request.text)?;
    Ok(AnalyzeResponse::new(request.text, analysis, Utc::now()))
  }
}

/// Production implementation of trait `AnalyzerApiService`
impl AnalyzerApiService for TextAnalyzerService {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    TextAnalyzerService::analyze(self, request)
  }
}
