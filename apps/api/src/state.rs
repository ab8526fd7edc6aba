//! # アプリケーション状態
//!
//! ハンドラ間で共有する依存コンポーネントを保持する。
//! すべて起動時に一度構築され、以降は読み取り専用。

use std::{path::PathBuf, sync::Arc};

use eventlink_infra::{
    repository::{EventRepository, UserRepository},
    session::SessionStore,
};

use crate::usecase::notification::NotificationService;

/// アプリケーション状態
///
/// リクエスト間で共有される依存コンポーネント。可変な共有状態は持たない。
#[derive(Clone)]
pub struct AppState {
    pub user_repository:  Arc<dyn UserRepository>,
    pub event_repository: Arc<dyn EventRepository>,
    pub session_store:    Arc<dyn SessionStore>,
    pub notifier:         Arc<NotificationService>,
    pub downloads_dir:    PathBuf,
}
