//! ルーター定義

use std::future::Future;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{health_check, post_analyze, service_status};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let body_limit = state.config.body_limit_bytes;

  Router::new()
    .route("/", get(service_status))
    .route("/analyze", post(post_analyze))
    .route("/health", get(health_check))
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl-C または SIGTERM を受け取ると処理中のリクエストを完了させてから終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  info!("サーバーを起動します: http://{}", addr);

  serve(listener, state, shutdown_signal()).await
}

/// 既にバインド済みのリスナーでサーバーを実行する
///
/// `shutdown` が完了するとグレースフルシャットダウンに入る。
///
/// # Errors
/// サーバーの実行中にエラーが発生した場合
pub async fn serve<F>(
  listener: TcpListener,
  state: AppState,
  shutdown: F,
) -> crate::errors::Result<()>
where
  F: Future<Output = ()> + Send + 'static,
{
  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  info!("サーバーを停止しました");
  Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      warn!(error = %e, "Ctrl-C ハンドラーの登録に失敗");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        warn!(error = %e, "SIGTERM ハンドラーの登録に失敗");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  info!("received shutdown signal, draining connections");
}
