//! # セッションストア
//!
//! ベアラートークンをユーザー ID に解決する。
//!
//! トークンの発行と署名検証は外部の認証基盤の責務で、このシステムは
//! 「提示されたトークンがどのユーザーに対応するか」の解決のみを行う。

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use eventlink_domain::user::UserId;

use crate::error::InfraError;

/// セッションストアトレイト
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// トークンをユーザー ID に解決する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user_id))`: 有効なトークン
    /// - `Ok(None)`: 未知または失効したトークン
    /// - `Err(_)`: ストアエラー
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, InfraError>;

    /// トークンを登録する（開発・テスト用シード）
    async fn insert(&self, token: String, user_id: UserId) -> Result<(), InfraError>;
}

/// インメモリ実装の SessionStore
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    tokens: Arc<Mutex<HashMap<String, UserId>>>,
}

impl InMemorySessionStore {
    /// 新しい空のストアを作成する
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, UserId>>, InfraError> {
        self.tokens
            .lock()
            .map_err(|_| InfraError::Store("セッションストアのロックが破損しています".to_string()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, InfraError> {
        Ok(self.lock()?.get(token).cloned())
    }

    async fn insert(&self, token: String, user_id: UserId) -> Result<(), InfraError> {
        self.lock()?.insert(token, user_id);
        Ok(())
    }
}
