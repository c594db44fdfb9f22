//! TextAnalyzer: 入力長の上限チェック付きの解析器

use tracing::debug;

use super::counter::{count_characters, count_words};
use crate::config::AnalyzerConfig;
use crate::errors::{AnalyzerError, TextLensResult};
use crate::models::TextAnalysis;

/// テキスト解析器
///
/// 不変で状態を持たないため、`Arc` で共有して複数スレッドから同時に使用できる。
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
  /// 最大文字数（コードポイント）。`None` なら無制限
  max_characters: Option<usize>,
}

impl TextAnalyzer {
  /// 設定から解析器を作成する
  ///
  /// # Errors
  /// 設定が不正な場合（max_characters が 0 等）
  pub fn new(config: &AnalyzerConfig) -> TextLensResult<Self> {
    config.validate()?;

    debug!(max_characters = ?config.max_characters(), "TextAnalyzer を初期化しました");

    Ok(Self {
      max_characters: config.max_characters(),
    })
  }

  /// 入力長の上限を持たない解析器を作成する
  #[must_use]
  pub fn unbounded() -> Self {
    Self::default()
  }

  /// 設定されている最大文字数
  pub fn max_characters(&self) -> Option<usize> {
    self.max_characters
  }

  /// テキストを解析する
  ///
  /// 上限ちょうどの長さは許可する。空文字列は 0 単語・0 文字として成功する。
  ///
  /// # Errors
  /// 文字数が上限を超えた場合 `AnalyzerError::TextTooLong`
  pub fn analyze(&self, text: &str) -> TextLensResult<TextAnalysis> {
    let character_count = count_characters(text);

    if let Some(max) = self.max_characters
      && character_count > max
    {
      return Err(
        AnalyzerError::TextTooLong {
          actual: character_count,
          max,
        }
        .into(),
      );
    }

    Ok(TextAnalysis {
      word_count: count_words(text),
      character_count,
    })
  }
}
