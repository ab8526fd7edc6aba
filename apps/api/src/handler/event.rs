//! # イベントハンドラ
//!
//! 認証済みユーザーが登録したイベントの一覧 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /events` - プロファイルのイベント参加リストを解決した一覧
//!
//! ## 解決のセマンティクス
//!
//! プロファイル内のイベント ID リストはドキュメントストア上の実体と
//! 整合している保証がない。ID として不正な要素、実体が見つからない
//! 要素は**黙ってスキップ**し、解決できたイベントのみを返す。

use axum::{Extension, Json, extract::State, response::IntoResponse};
use eventlink_domain::event::{Event, EventId};
use serde::Serialize;
use serde_json::json;

use crate::{error::ApiError, middleware::CurrentUser, state::AppState};

/// イベント DTO
#[derive(Debug, Serialize)]
pub struct EventDto {
    pub id:          String,
    pub title:       String,
    pub description: String,
    pub location:    String,
    pub starts_at:   String,
    pub organizer:   Option<String>,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id:          event.id().to_string(),
            title:       event.title().as_str().to_string(),
            description: event.description().to_string(),
            location:    event.location().to_string(),
            starts_at:   event.starts_at().to_rfc3339(),
            organizer:   event.organizer().map(|o| o.as_str().to_string()),
        }
    }
}

/// GET /events
///
/// 認証済みユーザーの役割に応じたイベント参加リストを実体に解決して返す。
#[tracing::instrument(skip_all)]
pub async fn list_my_events(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let mut events: Vec<EventDto> = Vec::new();

    for raw_id in user.registered_event_ids() {
        let Ok(event_id) = EventId::parse(&raw_id) else {
            tracing::warn!(event_id = %raw_id, "不正なイベントIDをスキップ");
            continue;
        };

        match state.event_repository.find_by_id(&event_id).await? {
            Some(event) => events.push(EventDto::from(&event)),
            None => {
                tracing::warn!(event_id = %raw_id, "実体のないイベントIDをスキップ");
            }
        }
    }

    Ok(Json(json!({
        "events": events,
        "count": events.len(),
    })))
}
