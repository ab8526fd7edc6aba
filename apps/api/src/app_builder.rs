//! # アプリケーション構築
//!
//! DI（State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## ルートグループ
//!
//! - **認証必須**: `/profile`、`/events`（`require_user`）
//! - **管理者のみ**: `/users`、`/users/{user_id}`（`require_admin`）
//! - **公開**: ヘルスチェック、通知エンドポイント、ダウンロード

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handler::{
        download::download_file,
        event::list_my_events,
        health::health_check,
        notification::{
            send_event_registration,
            send_evs_document,
            send_login_alert,
            send_participant_welcome,
            send_welcome,
        },
        profile::{get_profile, update_profile},
        user::{get_user, list_users},
    },
    middleware::{AuthState, require_admin, require_user},
    state::AppState,
};

/// ルーターを構築する
///
/// ミドルウェアの適用順に注意: `layer` はそれより**前に**登録した
/// ルートにのみ適用されるため、ルートグループごとに `merge` する。
pub fn build_app(state: AppState) -> Router {
    let auth_state = AuthState {
        session_store:   state.session_store.clone(),
        user_repository: state.user_repository.clone(),
    };

    // 認証必須ルート
    let protected_routes = Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/events", get(list_my_events))
        .layer(from_fn_with_state(auth_state.clone(), require_user));

    // 管理者のみルート
    let admin_routes = Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .layer(from_fn_with_state(auth_state, require_admin));

    // 公開ルート
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(send_login_alert))
        .route("/events/participant", post(send_participant_welcome))
        .route("/events/register", post(send_event_registration))
        .route("/auth/send_attachment", post(send_welcome))
        .route("/auth/send_evs", post(send_evs_document))
        .route("/download/{filename}", get(download_file));

    Router::new()
        .merge(protected_routes)
        .merge(admin_routes)
        .merge(public_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
