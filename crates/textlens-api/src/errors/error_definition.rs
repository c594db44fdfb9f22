//! APIエラー定義

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

// textlens クレートのエラー型をインポート
use textlens::errors::{AnalyzerError, TextLensError};

/// 内部エラー時にクライアントへ返す固定メッセージ
const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// リクエストの検証に失敗（JSON 不正、text 欠落、型違い）
  Validation,
  /// テキストが長すぎる
  TextTooLong,
  /// リクエストボディが大きすぎる
  PayloadTooLarge,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::TextTooLong => "text_too_long",
      Self::PayloadTooLarge => "payload_too_large",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
      Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// リクエストの検証に失敗
  #[error("invalid request: {0}")]
  Validation(String),

  /// テキストが長すぎる
  #[error("text too long: {0} characters (max {1})")]
  TextTooLong(usize, usize),

  /// リクエストボディが大きすぎる
  #[error("request body too large: {0}")]
  PayloadTooLarge(String),

  /// 内部エラー
  #[error("internal error: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::PayloadTooLarge(_) => ApiErrorKind::PayloadTooLarge,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 検証エラーを作成
  #[must_use]
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// ボディサイズ超過エラーを作成
  #[must_use]
  pub fn payload_too_large(message: impl Into<String>) -> Self {
    Self::PayloadTooLarge(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// クライアントに返すメッセージ
  ///
  /// 5xx は詳細を隠して固定メッセージにする。
  fn public_message(&self) -> String {
    if self.status().is_server_error() {
      GENERIC_INTERNAL_MESSAGE.to_string()
    } else {
      self.to_string()
    }
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    if status.is_server_error() {
      error!(code = self.code(), error = %self, "リクエスト処理中にエラーが発生");
    }

    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.public_message(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// TextLensError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<TextLensError> for ApiError {
  fn from(err: TextLensError) -> Self {
    match err {
      TextLensError::Analyzer(AnalyzerError::TextTooLong { actual, max }) => {
        ApiError::text_too_long(actual, max)
      }
      TextLensError::Config(err) => ApiError::config(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Json extractor の rejection から ApiError への変換
///
/// ボディサイズ超過以外はすべて検証エラー（422）として扱う。
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
      ApiError::payload_too_large(rejection.body_text())
    } else {
      ApiError::validation(rejection.body_text())
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_creation() {
    let err = ApiError::validation("missing field `text`");
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.code(), "validation_error");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err.public_message().contains("missing field `text`"));
  }

  #[test]
  fn text_too_long_creation() {
    let err = ApiError::text_too_long(100, 50);
    assert_eq!(err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(err.code(), "text_too_long");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("100"));
    assert!(err.to_string().contains("50"));
  }

  #[test]
  fn payload_too_large_creation() {
    let err = ApiError::payload_too_large("length limit exceeded");
    assert_eq!(err.code(), "payload_too_large");
    assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
  }

  #[test]
  fn internal_creation_hides_detail() {
    let err = ApiError::internal("serializer exploded");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.code(), "internal_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), GENERIC_INTERNAL_MESSAGE);
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("PORT is invalid");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.code(), "config_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_textlens_error_text_too_long() {
    let err = TextLensError::Analyzer(AnalyzerError::TextTooLong {
      actual: 10_001,
      max: 10_000,
    });
    let api_err: ApiError = err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn from_textlens_error_config() {
    use textlens::errors::ConfigError;
    let err = TextLensError::Config(ConfigError::InvalidMaxCharacters { actual: 0 });
    let api_err: ApiError = err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Config);
    assert_eq!(api_err.code(), "config_error");
  }
}
