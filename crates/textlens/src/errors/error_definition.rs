//! エラー定義

use thiserror::Error;

/// 設定（AnalyzerConfig）関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// max_characters が 0
  #[error("max_characters は 1 以上である必要があります: actual={actual}")]
  InvalidMaxCharacters {
    /// 実際に指定された値
    actual: usize,
  },
}

/// 解析関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 入力テキストが上限を超えている
  #[error("text too long: {actual} characters (max {max})")]
  TextTooLong {
    /// 入力テキストの文字数（コードポイント）
    actual: usize,
    /// 許容される最大文字数
    max: usize,
  },
}

/// 統合エラー
/// 本クレートの外部に公開する API はこのエラーを返すこと
/// `TextLensResult<T>` = `Result<T, TextLensError>` として使用する
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextLensError {
  /// 解析関連エラー
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// textlens クレートの標準 Result 型エイリアス
pub type TextLensResult<T> = Result<T, TextLensError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_too_long_message_contains_counts() {
    let err = AnalyzerError::TextTooLong {
      actual: 10_001,
      max: 10_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("10001"));
    assert!(msg.contains("10000"));
  }

  #[test]
  fn umbrella_error_is_transparent() {
    let inner = AnalyzerError::TextTooLong { actual: 3, max: 2 };
    let outer: TextLensError = inner.clone().into();
    assert_eq!(outer.to_string(), inner.to_string());
  }
}
