//! # ユーザーハンドラ
//!
//! 管理者向けのユーザー照会 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /users` - ユーザー一覧（`?role=` で任意フィルタ）
//! - `GET /users/{user_id}` - ユーザー個別取得
//!
//! どちらも `require_admin` の後段に配置される。

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use eventlink_domain::user::{Profile, User, UserId, UserRole};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::ApiError, state::AppState};

// --- リクエスト/レスポンス型 ---

/// ユーザー一覧のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

/// ユーザー DTO
///
/// `password_hash` は含めない。認証情報は外部公開用のシリアライズに
/// 一切含めないというドメインの不変条件をここで守る。
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id:      String,
    pub name:    String,
    pub email:   String,
    pub role:    UserRole,
    pub profile: Profile,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id:      user.id().to_string(),
            name:    user.name().as_str().to_string(),
            email:   user.email().as_str().to_string(),
            role:    user.role(),
            profile: user.profile().clone(),
        }
    }
}

// --- ハンドラ ---

/// GET /users
///
/// ユーザー一覧を取得する。`?role=volunteer` のように役割で絞り込める。
/// 未知の役割文字列はどの役割にも一致しない（空リストを返す）。
#[tracing::instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let users = match query.role.as_deref() {
        Some(raw) => match raw.parse::<UserRole>() {
            Ok(role) => state.user_repository.find_all(Some(role)).await?,
            // 未知の役割は閉集合に含まれないため、該当ユーザーなし
            Err(_) => Vec::new(),
        },
        None => state.user_repository.find_all(None).await?,
    };

    let items: Vec<UserDto> = users.iter().map(UserDto::from).collect();

    Ok(Json(json!({
        "users": items,
        "count": items.len(),
    })))
}

/// GET /users/{user_id}
///
/// ユーザーを個別に取得する。ID が UUID として不正な場合も
/// 404 として扱う（存在しない ID と区別しない）。
#[tracing::instrument(skip_all, fields(%user_id))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let not_found = || ApiError::NotFound("User not found".to_string());

    let id = UserId::parse(&user_id).map_err(|_| not_found())?;

    let user = state
        .user_repository
        .find_by_id(&id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(UserDto::from(&user)))
}
