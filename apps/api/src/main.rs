//! # EventLink API サーバー
//!
//! イベント管理アプリケーションの HTTP バックエンド。
//!
//! ## 役割
//!
//! - プロファイルの取得・更新（認証必須）
//! - 登録イベントの一覧（認証必須）
//! - ユーザー照会（管理者のみ）
//! - メール通知（ログイン通知・登録確認・ウェルカム・EVS）
//! - ファイルダウンロード
//!
//! ユーザーの作成・認証トークンの発行は外部コラボレータの責務。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DOWNLOAD_DIR` | No | ダウンロード配信ディレクトリ（デフォルト: `downloads`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` または `noop`（デフォルト: `smtp`） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | メール投稿ホスト（デフォルト: `smtp.gmail.com:465`） |
//! | `EMAIL_SENDER` / `EMAIL_PASSWORD` | No | 送信元クレデンシャル |
//! | `NOTIFICATION_RECIPIENT` | No | 全通知の実際の宛先となる固定アドレス |
//! | `WELCOME_ATTACHMENT_PATH` | No | ウェルカム添付のパス |
//! | `EVS_ATTACHMENT_PATH` | No | EVS 添付のパス（未設定時 EVS 送信は失敗する） |
//! | `DEV_SEED_ENABLED` | No | 開発用シードデータの投入（`true` で有効） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（メール送信なし）
//! NOTIFICATION_BACKEND=noop DEV_SEED_ENABLED=true cargo run -p eventlink-api
//! ```

use std::sync::Arc;

use eventlink_api::{
    app_builder::build_app,
    config::ApiConfig,
    state::AppState,
    usecase::notification::{NotificationService, TemplateRenderer},
};
use eventlink_domain::user::{Email, User, UserId, UserName, UserRole};
use eventlink_infra::{
    notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender},
    repository::{
        EventRepository,
        InMemoryEventRepository,
        InMemoryUserRepository,
        UserRepository,
    },
    session::{InMemorySessionStore, SessionStore},
};
use eventlink_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. 通知バックエンドとストアの構築
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let config = ApiConfig::from_env()?;

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // 通知バックエンドの選択
    let sender: Arc<dyn NotificationSender> = match config.notification.backend.as_str() {
        "smtp" => Arc::new(SmtpNotificationSender::new(
            &config.notification.smtp_host,
            config.notification.smtp_port,
            config.notification.sender_address.clone(),
            config.notification.sender_address.clone(),
            config.notification.sender_password.clone(),
        )?),
        "noop" => {
            tracing::warn!("通知バックエンドが noop です。メールは送信されません");
            Arc::new(NoopNotificationSender)
        }
        other => anyhow::bail!("未知の通知バックエンド: {other}"),
    };

    let renderer = TemplateRenderer::new()?;
    let notifier = Arc::new(NotificationService::new(
        sender,
        renderer,
        &config.notification,
    ));

    // ドキュメントストアは外部コラボレータのため、インメモリ実装を使用する
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let event_repository = Arc::new(InMemoryEventRepository::new());
    let session_store = Arc::new(InMemorySessionStore::new());

    if std::env::var("DEV_SEED_ENABLED").is_ok_and(|v| v == "true") {
        seed_dev_data(
            user_repository.as_ref(),
            event_repository.as_ref(),
            session_store.as_ref(),
        )
        .await?;
    }

    let state = AppState {
        user_repository,
        event_repository,
        session_store,
        notifier,
        downloads_dir: config.downloads_dir.clone(),
    };

    let app = build_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// 開発用シードデータを投入する
///
/// インメモリストアは起動時に空のため、手元での動作確認用に
/// 管理者・ボランティアと対応するトークンを登録する。
async fn seed_dev_data(
    user_repository: &InMemoryUserRepository,
    event_repository: &InMemoryEventRepository,
    session_store: &InMemorySessionStore,
) -> anyhow::Result<()> {
    use chrono::{Duration, Utc};
    use eventlink_domain::{
        event::{Event, EventId, EventTitle},
        user::{PROFILE_EVENTS_PARTICIPATED, Profile},
    };

    let event = Event::from_store(
        EventId::new(),
        EventTitle::new("Community Cleanup")?,
        "Neighborhood park cleanup".to_string(),
        "Central Park".to_string(),
        Utc::now() + Duration::days(7),
        Some(UserName::new("EventLink Staff")?),
    );
    event_repository.insert(&event).await?;

    let admin = User::new(
        UserId::new(),
        UserName::new("Dev Admin")?,
        Email::new("admin@eventlink.example.com")?,
        UserRole::Admin,
    );
    session_store
        .insert("dev-admin-token".to_string(), admin.id().clone())
        .await?;
    user_repository.insert(&admin).await?;

    let mut profile = Profile::new();
    profile.insert(
        PROFILE_EVENTS_PARTICIPATED.to_string(),
        serde_json::json!([event.id().to_string()]),
    );
    let volunteer = User::new(
        UserId::new(),
        UserName::new("Dev Volunteer")?,
        Email::new("volunteer@eventlink.example.com")?,
        UserRole::Volunteer,
    )
    .with_profile(profile);
    session_store
        .insert("dev-volunteer-token".to_string(), volunteer.id().clone())
        .await?;
    user_repository.insert(&volunteer).await?;

    tracing::warn!(
        "開発用シードデータを投入しました (dev-admin-token / dev-volunteer-token)"
    );

    Ok(())
}
