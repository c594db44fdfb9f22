//! サービスモジュール

mod analyzer_service;

pub use analyzer_service::{AnalyzerApiService, TextAnalyzerService};
