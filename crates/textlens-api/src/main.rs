//! textlens-api サーバーエントリーポイント
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TEXTLENS_BIND_ADDR` | *(unset)* | Bind address, wins over `PORT` |
//! | `PORT` | `8000` | Port on `0.0.0.0` |
//! | `TEXTLENS_MAX_TEXT_CHARS` | `10000` | Max text length in code points |
//! | `TEXTLENS_BODY_LIMIT_BYTES` | `1048576` | Max request body size |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use textlens_api::ApiError;
use textlens_api::api::AppState;
use textlens_api::api::run_server;
use textlens_api::config::Config;
use textlens_api::service::TextAnalyzerService;

/// ロギングの初期化
///
/// `RUST_LOG` が設定されていればそれを使い、なければ `LOG_LEVEL` を使う。
fn init_tracing(log_level: &str) -> Result<(), ApiError> {
  let filter = if std::env::var("RUST_LOG").is_ok() {
    EnvFilter::from_default_env()
  } else {
    EnvFilter::try_new(log_level)
      .map_err(|e| ApiError::config(format!("invalid log level filter {log_level:?}: {e}")))?
  };

  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
  Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;
  init_tracing(&config.log_level)?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    max_text_chars = config.max_text_chars,
    body_limit_bytes = config.body_limit_bytes,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(TextAnalyzerService::new(&config)?);
  tracing::info!("テキスト解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
