//! textlens テキスト解析ライブラリー
//!
//! 単語数・文字数のカウントを行う。I/O を持たない純粋な処理のみ。
//!
//! - 文字数: Unicode コードポイント数（バイト数でも書記素クラスタ数でもない）
//! - 単語数: Unicode `White_Space` で区切られた、空でない連続部分文字列の数

/// 解析モジュール - カウント関数と TextAnalyzer を提供
pub mod analyzer;

/// 設定モジュール - AnalyzerConfig を定義
pub mod config;

/// エラーモジュール - TextLensError, TextLensResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - TextAnalysis を定義
pub mod models;

/// 再エクスポート
pub use analyzer::{TextAnalyzer, count_characters, count_words};
pub use config::AnalyzerConfig;
pub use errors::{TextLensError, TextLensResult};
pub use models::TextAnalysis;
