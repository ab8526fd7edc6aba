//! # EventRepository
//!
//! イベントドキュメントの参照を担当するリポジトリ。
//! このシステムからは ID による参照のみ（作成・更新は外部コラボレータ）。

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use eventlink_domain::event::{Event, EventId};

use crate::error::InfraError;

/// イベントリポジトリトレイト
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// ID でイベントを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(event))`: イベントが見つかった場合
    /// - `Ok(None)`: イベントが見つからない場合
    /// - `Err(_)`: ストアエラー
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, InfraError>;

    /// イベントを登録する（開発・テスト用シード）
    async fn insert(&self, event: &Event) -> Result<(), InfraError>;
}

/// インメモリ実装の EventRepository
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<Mutex<HashMap<EventId, Event>>>,
}

impl InMemoryEventRepository {
    /// 新しい空のリポジトリを作成する
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<EventId, Event>>, InfraError> {
        self.events
            .lock()
            .map_err(|_| InfraError::Store("イベントストアのロックが破損しています".to_string()))
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, InfraError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn insert(&self, event: &Event) -> Result<(), InfraError> {
        self.lock()?.insert(event.id().clone(), event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eventlink_domain::event::EventTitle;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_event() -> Event {
        Event::from_store(
            EventId::new(),
            EventTitle::new("清掃ボランティア").unwrap(),
            "公園の清掃活動".to_string(),
            "中央公園".to_string(),
            Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn test_登録したイベントをidで取得できる() {
        let repo = InMemoryEventRepository::new();
        let event = make_event();
        repo.insert(&event).await.unwrap();

        let found = repo.find_by_id(event.id()).await.unwrap();

        assert_eq!(found, Some(event));
    }

    #[tokio::test]
    async fn test_存在しないidはnoneを返す() {
        let repo = InMemoryEventRepository::new();

        let found = repo.find_by_id(&EventId::new()).await.unwrap();

        assert_eq!(found, None);
    }
}
