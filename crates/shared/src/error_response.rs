//! # エラーレスポンス
//!
//! API 全体で共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は api クレートの責務（shared に axum 依存を入れない）
//! - ワイヤ契約はフラットな `{ "error": "..." }`。クライアントが依存するのは
//!   `error` キーの存在のみで、メッセージ文面は契約に含まれない

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべてのエラー応答で統一された `{ "error": "..." }` 形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 新しいエラーレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
