//! # イベント
//!
//! イベントエンティティを定義する。
//!
//! イベントの作成・更新は外部コラボレータ（ドキュメントストア）の責務で、
//! このシステムからは ID による参照専用。

use chrono::{DateTime, Utc};

use crate::user::UserName;

define_uuid_id! {
    /// イベント ID（一意識別子）
    ///
    /// プロファイル内のイベント参加リストには文字列表現で格納される。
    pub struct EventId;
}

define_validated_string! {
    /// イベントタイトル（値オブジェクト）
    pub struct EventTitle {
        label: "イベントタイトル",
        max_length: 200,
    }
}

/// イベントエンティティ（読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: EventTitle,
    description: String,
    location: String,
    starts_at: DateTime<Utc>,
    organizer: Option<UserName>,
}

impl Event {
    /// 既存のデータからイベントを復元する（ドキュメントストアから取得時）
    pub fn from_store(
        id: EventId,
        title: EventTitle,
        description: String,
        location: String,
        starts_at: DateTime<Utc>,
        organizer: Option<UserName>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            starts_at,
            organizer,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn title(&self) -> &EventTitle {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn organizer(&self) -> Option<&UserName> {
        self.organizer.as_ref()
    }
}
