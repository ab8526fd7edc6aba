//! # UserRepository
//!
//! ユーザードキュメントの参照とプロファイル更新を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - 更新はプロファイルの丸ごと置換のみ。他のフィールドはこのシステムから
//!   一切変更しない
//! - `update_profile` は対象ユーザーが存在しない場合 `Ok(false)` を返す
//!   （更新失敗とストア障害を区別する）

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use eventlink_domain::user::{Profile, User, UserId, UserRole};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザードキュメントへの参照操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: ストアエラー
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError>;

    /// ユーザー一覧を取得（任意で役割フィルタ）
    ///
    /// `role` が Some の場合、その役割のユーザーのみを返す。
    async fn find_all(&self, role: Option<UserRole>) -> Result<Vec<User>, InfraError>;

    /// プロファイルを丸ごと置換する
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 置換が適用された
    /// - `Ok(false)`: 対象ユーザーが存在しない
    async fn update_profile(&self, id: &UserId, profile: Profile) -> Result<bool, InfraError>;

    /// ユーザーを登録する（開発・テスト用シード）
    async fn insert(&self, user: &User) -> Result<(), InfraError>;
}

/// インメモリ実装の UserRepository
///
/// ドキュメントストアが外部コラボレータであるため、開発環境と
/// 統合テストではこの実装を使用する。
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// 新しい空のリポジトリを作成する
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<UserId, User>>, InfraError> {
        self.users
            .lock()
            .map_err(|_| InfraError::Store("ユーザーストアのロックが破損しています".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn find_all(&self, role: Option<UserRole>) -> Result<Vec<User>, InfraError> {
        let users = self.lock()?;
        let mut found: Vec<User> = users
            .values()
            .filter(|u| role.is_none_or(|r| u.role() == r))
            .cloned()
            .collect();
        // HashMap の走査順は不定のため、一覧 API の応答を安定させる
        found.sort_by_key(|u| *u.id().as_uuid());
        Ok(found)
    }

    async fn update_profile(&self, id: &UserId, profile: Profile) -> Result<bool, InfraError> {
        let mut users = self.lock()?;
        match users.remove(id) {
            Some(user) => {
                users.insert(id.clone(), user.with_profile(profile));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        self.lock()?.insert(user.id().clone(), user.clone());
        Ok(())
    }
}
