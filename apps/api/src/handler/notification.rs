//! # 通知ハンドラ
//!
//! メール通知を伴うエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /auth/login` - ログイン通知
//! - `POST /events/participant` - 参加者ウェルカム（添付あり）
//! - `POST /events/register` - イベント登録確認
//! - `POST /auth/send_attachment` - 汎用ウェルカム（添付あり）
//! - `POST /auth/send_evs` - EVS ドキュメント送付
//!
//! ## 共通セマンティクス
//!
//! - リクエストボディは `{ "email": ..., "name": ... }`。`email` 欠落は 400
//! - `name` 欠落時は `"User"` を宛名に使う
//! - メール送信の成否がレスポンスを決める: 成功 200 / 失敗 500
//!   （送信は同期的な単発試行でリトライしない）

use axum::{Json, extract::{State, rejection::JsonRejection}, response::IntoResponse};
use eventlink_domain::notification::UserNotification;
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, state::AppState};

/// 通知リクエスト
///
/// 全通知エンドポイント共通のボディ。
#[derive(Debug, Deserialize)]
pub struct NotificationRequest {
    pub email: Option<String>,
    pub name:  Option<String>,
}

/// 検証済みの通知リクエスト
struct ValidatedRequest {
    email: String,
    name:  String,
}

/// ボディから宛先と宛名を取り出す
///
/// ボディなし・`email` 欠落は 400。`name` 欠落は `"User"` で補う。
/// JSON として展開できないボディも 400（`{ "error": ... }` 形式を維持）。
fn validate(
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<ValidatedRequest, ApiError> {
    let payload = payload?.map(|Json(p)| p);

    let email = payload
        .as_ref()
        .and_then(|p| p.email.clone())
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;

    let name = payload
        .and_then(|p| p.name)
        .unwrap_or_else(|| "User".to_string());

    Ok(ValidatedRequest { email, name })
}

/// 送信結果をレスポンスに変換する
fn delivery_response(sent: bool, message: &str, email: &str) -> Result<Json<serde_json::Value>, ApiError> {
    if !sent {
        return Err(ApiError::EmailDeliveryFailed);
    }

    Ok(Json(json!({
        "message": message,
        "email": email,
    })))
}

/// POST /auth/login
///
/// ログイン通知メールを送信する。クレデンシャル検証は外部の認証基盤の
/// 責務で、このエンドポイントは通知送信のみを行う。
#[tracing::instrument(skip_all)]
pub async fn send_login_alert(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(payload)?;

    let sent = state
        .notifier
        .send(UserNotification::LoginAlert {
            name:  request.name,
            email: request.email.clone(),
        })
        .await;

    delivery_response(
        sent,
        "Login successful, notification email sent",
        &request.email,
    )
}

/// POST /events/participant
///
/// 参加者登録のウェルカムメール（添付あり）を送信する。
#[tracing::instrument(skip_all)]
pub async fn send_participant_welcome(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(payload)?;

    let sent = state
        .notifier
        .send(UserNotification::ParticipantWelcome {
            name:  request.name,
            email: request.email.clone(),
        })
        .await;

    delivery_response(
        sent,
        "Participant registration successful, email sent",
        &request.email,
    )
}

/// POST /events/register
///
/// イベント登録の確認メールを送信する。宛名は使わない固定文面。
#[tracing::instrument(skip_all)]
pub async fn send_event_registration(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(payload)?;

    let sent = state
        .notifier
        .send(UserNotification::EventRegistration {
            email: request.email.clone(),
        })
        .await;

    delivery_response(
        sent,
        "Event registration successful, email sent",
        &request.email,
    )
}

/// POST /auth/send_attachment
///
/// 汎用ウェルカムメール（添付あり）を送信する。
#[tracing::instrument(skip_all)]
pub async fn send_welcome(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(payload)?;

    let sent = state
        .notifier
        .send(UserNotification::Welcome {
            name:  request.name,
            email: request.email.clone(),
        })
        .await;

    delivery_response(sent, "Welcome email sent successfully", &request.email)
}

/// POST /auth/send_evs
///
/// EVS ドキュメント送付メールを送信する。添付パスが設定されていない
/// 場合は送信せず 500 を返す（フェイルクローズ）。
#[tracing::instrument(skip_all)]
pub async fn send_evs_document(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotificationRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = validate(payload)?;

    let sent = state
        .notifier
        .send(UserNotification::EvsDocument {
            name:  request.name,
            email: request.email.clone(),
        })
        .await;

    delivery_response(sent, "EVS email sent successfully", &request.email)
}
