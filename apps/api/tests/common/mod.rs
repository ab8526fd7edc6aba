//! 統合テスト共通ヘルパー
//!
//! インメモリストアとモック通知送信でアプリ全体を組み立てる。
//! HTTP レイヤは `tower::ServiceExt::oneshot` で直接駆動する。

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response, StatusCode, header},
};
use eventlink_api::{
    app_builder::build_app,
    config::NotificationConfig,
    state::AppState,
    usecase::notification::{NotificationService, TemplateRenderer},
};
use eventlink_domain::{
    event::{Event, EventId, EventTitle},
    user::{
        Email,
        PROFILE_EVENTS_PARTICIPATED,
        Profile,
        User,
        UserId,
        UserName,
        UserRole,
    },
};
use eventlink_infra::{
    mock::MockNotificationSender,
    repository::{EventRepository, InMemoryEventRepository, InMemoryUserRepository, UserRepository},
    session::{InMemorySessionStore, SessionStore},
};
use tower::ServiceExt;

/// シード済みボランティアのトークン
pub const VOLUNTEER_TOKEN: &str = "volunteer-token";

/// シード済み管理者のトークン
pub const ADMIN_TOKEN: &str = "admin-token";

/// テストアプリの構築オプション
pub struct TestAppOptions {
    pub sender:             MockNotificationSender,
    pub welcome_attachment: PathBuf,
    pub evs_attachment:     Option<PathBuf>,
    pub downloads_dir:      PathBuf,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            sender:             MockNotificationSender::new(),
            welcome_attachment: PathBuf::from("nonexistent-welcome.pdf"),
            evs_attachment:     None,
            downloads_dir:      PathBuf::from("nonexistent-downloads"),
        }
    }
}

/// シード済みデータの ID
pub struct SeededData {
    pub volunteer_id: UserId,
    pub admin_id:     UserId,
    pub event_id:     EventId,
}

/// シード済みのテストアプリを構築する
///
/// - ボランティア 1 名（イベント 1 件 + 不正 ID + 実体なし ID を参加リストに持つ）
/// - 管理者 1 名
/// - イベント 1 件
pub async fn build_test_app(options: TestAppOptions) -> (Router, SeededData) {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let event_repository = Arc::new(InMemoryEventRepository::new());
    let session_store = Arc::new(InMemorySessionStore::new());

    let event = Event::from_store(
        EventId::new(),
        EventTitle::new("Community Cleanup").unwrap(),
        "Neighborhood park cleanup".to_string(),
        "Central Park".to_string(),
        chrono::Utc::now(),
        None,
    );
    event_repository.insert(&event).await.unwrap();

    let mut profile = Profile::new();
    profile.insert(
        PROFILE_EVENTS_PARTICIPATED.to_string(),
        serde_json::json!([
            event.id().to_string(),
            "not-a-uuid",
            EventId::new().to_string(),
        ]),
    );
    let volunteer = User::new(
        UserId::new(),
        UserName::new("Test Volunteer").unwrap(),
        Email::new("volunteer@example.com").unwrap(),
        UserRole::Volunteer,
    )
    .with_profile(profile);
    user_repository.insert(&volunteer).await.unwrap();
    session_store
        .insert(VOLUNTEER_TOKEN.to_string(), volunteer.id().clone())
        .await
        .unwrap();

    let admin = User::new(
        UserId::new(),
        UserName::new("Test Admin").unwrap(),
        Email::new("admin@example.com").unwrap(),
        UserRole::Admin,
    );
    user_repository.insert(&admin).await.unwrap();
    session_store
        .insert(ADMIN_TOKEN.to_string(), admin.id().clone())
        .await
        .unwrap();

    let notification_config = NotificationConfig {
        backend:            "noop".to_string(),
        smtp_host:          "localhost".to_string(),
        smtp_port:          465,
        sender_address:     "sender@example.com".to_string(),
        sender_password:    "secret".to_string(),
        fixed_recipient:    "fixed@example.com".to_string(),
        welcome_attachment: options.welcome_attachment,
        evs_attachment:     options.evs_attachment,
    };

    let notifier = Arc::new(NotificationService::new(
        Arc::new(options.sender),
        TemplateRenderer::new().unwrap(),
        &notification_config,
    ));

    let seeded = SeededData {
        volunteer_id: volunteer.id().clone(),
        admin_id:     admin.id().clone(),
        event_id:     event.id().clone(),
    };

    let state = AppState {
        user_repository,
        event_repository,
        session_store,
        notifier,
        downloads_dir: options.downloads_dir,
    };

    (build_app(state), seeded)
}

/// デフォルトオプションでテストアプリを構築する
pub async fn default_test_app() -> (Router, SeededData) {
    build_test_app(TestAppOptions::default()).await
}

/// リクエストを送信してレスポンスを返す
pub async fn send_request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// JSON コンテントタイプで生のボディを送信する（不正な JSON の検証用）
pub async fn send_raw_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    raw_body: &str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder.body(Body::from(raw_body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// レスポンスボディを JSON として取り出す
pub async fn response_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
