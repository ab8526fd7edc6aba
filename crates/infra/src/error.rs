//! # インフラ層エラー定義
//!
//! ドキュメントストアや外部サービスとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **ログ可能性**: Debug によりログ出力時に詳細情報を表示

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// ストア操作、シリアライズ、I/O などで発生するエラーの種別。
/// API 層でこのエラーに応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// ドキュメントストアエラー
    ///
    /// ストアへのアクセス失敗、ロック破損など。
    #[error("ストアエラー: {0}")]
    Store(String),

    /// シリアライズ/デシリアライズエラー
    ///
    /// JSON の変換に失敗した場合に使用する。
    #[error("シリアライズエラー: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O エラー
    #[error("I/O エラー: {0}")]
    Io(#[from] std::io::Error),
}
