//! データモデル定義

use serde::Serialize;

/// 解析結果（決定的な部分のみ）
///
/// 同じ入力に対して常に同じ値になる。タイムスタンプ等の非決定的な値は含めない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextAnalysis {
  /// 単語数（空白で区切られた空でない部分文字列の数）
  pub word_count: usize,
  /// 文字数（Unicode コードポイント数）
  pub character_count: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_analysis_serialization() {
    let analysis = TextAnalysis {
      word_count: 2,
      character_count: 11,
    };

    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("\"word_count\":2"));
    assert!(json.contains("\"character_count\":11"));
  }
}
