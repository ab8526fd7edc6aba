//! # 認証・認可ミドルウェア
//!
//! ベアラートークンを検証し、解決したユーザーをリクエスト拡張に格納する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState {
//!     session_store:   state.session_store.clone(),
//!     user_repository: state.user_repository.clone(),
//! };
//!
//! Router::new()
//!     .route("/profile", get(get_profile))
//!     .layer(from_fn_with_state(auth_state, require_user))
//! ```
//!
//! ## 認証フロー
//!
//! 1. `Authorization: Bearer <token>` ヘッダからトークンを抽出
//! 2. セッションストアでトークンをユーザー ID に解決
//! 3. ユーザードキュメントを取得し、[`CurrentUser`] としてハンドラへ渡す
//!
//! `require_admin` は上記に加えて役割が管理者であることを検証する。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use eventlink_domain::user::User;
use eventlink_infra::{repository::UserRepository, session::SessionStore};

use crate::error::ApiError;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
    pub session_store:   Arc<dyn SessionStore>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// 認証済みユーザー
///
/// ミドルウェアがリクエスト拡張に格納し、ハンドラが `Extension` で取り出す。
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// 認証ミドルウェア
///
/// トークンが欠落・無効な場合は 401 Unauthorized を返す。
pub async fn require_user(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    // ボディ（!Sync）への参照を await をまたいで保持しないよう、
    // トークンは所有権を持つ形で先に取り出す
    let token = extract_bearer_token(request.headers());

    let user = match authenticate(&state, token).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

/// 管理者認可ミドルウェア
///
/// 認証に加えて役割が管理者であることを検証する。
/// 管理者でない場合は 403 Forbidden を返す。
pub async fn require_admin(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_bearer_token(request.headers());

    let user = match authenticate(&state, token).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    if !user.is_admin() {
        return ApiError::Forbidden("Admin privilege required".to_string()).into_response();
    }

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

/// トークンを検証し、対応するユーザーを解決する
async fn authenticate(state: &AuthState, token: Option<String>) -> Result<User, ApiError> {
    let token = token
        .ok_or_else(|| ApiError::Unauthorized("Authentication token required".to_string()))?;

    let user_id = state
        .session_store
        .resolve(&token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    state
        .user_repository
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))
}

/// `Authorization: Bearer <token>` ヘッダからトークンを抽出する
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
