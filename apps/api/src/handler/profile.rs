//! # プロファイルハンドラ
//!
//! 認証済みユーザー自身のプロファイル取得・更新 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /profile` - 自分のユーザードキュメントを取得
//! - `PUT /profile` - プロファイルを丸ごと置換
//!
//! ## 更新のセマンティクス
//!
//! `PUT /profile` はリクエストボディの `profile` キーの値で既存
//! プロファイルを**全体置換**する。部分マージは行わず、送られなかった
//! キーは消える。`profile` 以外のユーザーフィールドは変更しない。

use axum::{
    Extension,
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use eventlink_domain::user::Profile;
use serde_json::{Value, json};

use crate::{error::ApiError, handler::user::UserDto, middleware::CurrentUser, state::AppState};

/// GET /profile
///
/// 認証済みユーザー自身のユーザードキュメントを返す。
#[tracing::instrument(skip_all)]
pub async fn get_profile(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserDto> {
    Json(UserDto::from(&user))
}

/// PUT /profile
///
/// プロファイルを丸ごと置換する。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のユーザードキュメント
/// - `400 Bad Request`: ボディが JSON でない、`profile` キーが欠落、
///   または JSON オブジェクトでない
#[tracing::instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let profile: Profile = body
        .get("profile")
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("Missing profile data".to_string()))?;

    let applied = state
        .user_repository
        .update_profile(user.id(), profile.clone())
        .await?;

    if !applied {
        return Err(ApiError::Internal("Failed to update profile".to_string()));
    }

    let updated = user.with_profile(profile);

    Ok(Json(json!({
        "message": "Profile updated successfully",
        "user": UserDto::from(&updated),
    })))
}
