//! HTTPハンドラー定義

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ServiceStatus};

use super::state::AppState;

/// POST /analyze エンドポイント
///
/// テキストの単語数と文字数を返す。
///
/// # Request Body
/// ```json
/// { "text": "Hello world" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 400 Bad Request: テキスト長超過
/// - 413 Payload Too Large: ボディサイズ超過
/// - 422 Unprocessable Entity: JSON 不正、`text` 欠落、文字列以外の `text`
/// - 500 Internal Server Error: 内部エラー
///
/// 処理は入力長に比例する軽い計算のみのため、spawn_blocking は使わずにその場で実行する。
pub async fn post_analyze(
  State(state): State<AppState>,
  payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let Json(request) = payload.inspect_err(|rejection| {
    warn!(status = %rejection.status(), reason = %rejection.body_text(), "リクエストを拒否");
  })?;

  debug!(text_len = request.text.len(), "テキスト解析リクエストを受信");

  let response = state.service.analyze(request)?;

  info!(
    word_count = response.word_count,
    character_count = response.character_count,
    "テキスト解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。liveness / readiness の両方に使う。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::ok())
}

/// GET / エンドポイント
///
/// サービス名・バージョン・現在時刻を返す。
pub async fn service_status() -> Json<ServiceStatus> {
  Json(ServiceStatus::healthy(Utc::now()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_health_check_body() {
    let Json(body) = health_check().await;
    assert_eq!(body.status, "ok");
  }

  #[tokio::test]
  async fn test_service_status_body() {
    let Json(body) = service_status().await;
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "text-analyzer");
    assert!(body.timestamp.ends_with('Z'));
  }
}
