//! API設定の定数定義

/// 入力テキストの最大長（Unicode コードポイント単位）
///
/// `TEXTLENS_MAX_TEXT_CHARS` が未設定の場合に使用する。
pub const DEFAULT_MAX_TEXT_CHARS: usize = 10_000;

/// リクエストボディの最大サイズ（バイト単位）
///
/// JSON のエスケープを含めても最大長のテキストが収まる大きさ。
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// デフォルトのバインドホスト
///
/// コンテナ内で動作するため全インターフェースで待ち受ける。
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
///
/// `PORT` が設定されていない場合に使用する。
pub const DEFAULT_PORT: u16 = 8000;

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// ステータスエンドポイントで返すサービス名
pub const SERVICE_NAME: &str = "text-analyzer";
