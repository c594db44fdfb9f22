//! リクエストモデル定義

use serde::Deserialize;

/// テキスト解析リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト
  pub text: String,
}
