//! analyzer モジュール
pub mod counter;
pub mod text_analyzer;

/// 再エクスポート
pub use counter::{count_characters, count_words};
pub use text_analyzer::TextAnalyzer;
