//! # ミドルウェア
//!
//! API 用の認証・認可ミドルウェアを提供する。

mod auth;

pub use auth::{AuthState, CurrentUser, require_admin, require_user};
