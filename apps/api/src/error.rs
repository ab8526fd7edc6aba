//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ワイヤ契約はフラットな `{ "error": "..." }`（`error` キーのみが契約で、
//! メッセージ文面はクライアント契約に含まれない）。
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `BadRequest` | 400 |
//! | `Unauthorized` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `EmailDeliveryFailed` / `Internal` / `Infra` | 500 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventlink_infra::InfraError;
use eventlink_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト（必須フィールド欠落など）
    #[error("{0}")]
    BadRequest(String),

    /// 認証失敗（クレデンシャル欠落・無効）
    #[error("{0}")]
    Unauthorized(String),

    /// 権限不足
    #[error("{0}")]
    Forbidden(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// メール送信失敗
    #[error("Failed to send email")]
    EmailDeliveryFailed,

    /// 内部エラー
    #[error("{0}")]
    Internal(String),

    /// インフラエラー
    #[error("{0}")]
    Infra(#[from] InfraError),
}

/// JSON ボディの展開失敗を 400 に変換する
///
/// axum 組み込みの rejection はプレーンテキストを返すため、そのままでは
/// `{ "error": ... }` のワイヤ契約を破る。ここで吸収して統一する。
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmailDeliveryFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) | ApiError::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "内部エラー");
        }

        // 500 でも例外メッセージを応答ボディに含める（移行元システムの挙動。
        // 情報開示の懸念は既知だがここでは是正しない）
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
