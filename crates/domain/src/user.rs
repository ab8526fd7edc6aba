//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`User`] | ユーザー | アカウント作成・認証は外部コラボレータの責務 |
//! | [`UserRole`] | ユーザー区分 | volunteer / participant / admin / member の閉集合 |
//! | [`Profile`] | プロファイル | 役割依存のイベント参加リストを含むオープンなマッピング |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UserId は UUID をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは基本的に不変、変更はメソッド経由
//! - **プロファイルの丸ごと置換**: このシステムが変更するのは `profile`
//!   サブフィールドのみで、更新は常に全体置換

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

define_uuid_id! {
    /// ユーザー ID（一意識別子）
    ///
    /// UUID v7 を使用し、生成順にソート可能。
    /// Newtype パターンで型安全性を確保。
    pub struct UserId;
}

define_validated_string! {
    /// ユーザー表示名（値オブジェクト）
    pub struct UserName {
        label: "ユーザー名",
        max_length: 100,
    }
}

/// プロファイル（オープンなマッピング）
///
/// ユーザー固有フィールドの自由形式 JSON オブジェクト。
/// 役割に応じて `events_participated`（ボランティア）または
/// `events_attended`（参加者）というイベント ID リストを含む。
pub type Profile = serde_json::Map<String, serde_json::Value>;

/// ボランティアのイベント参加リストのプロファイルキー
pub const PROFILE_EVENTS_PARTICIPATED: &str = "events_participated";

/// 参加者のイベント参加リストのプロファイルキー
pub const PROFILE_EVENTS_ATTENDED: &str = "events_attended";

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `@` を含む（local@domain の形式）
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ユーザー区分
///
/// 閉集合。外部システムが作成するユーザードキュメントの `role`
/// フィールドに対応する。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    /// ボランティア（`events_participated` を持つ）
    Volunteer,
    /// 参加者（`events_attended` を持つ）
    Participant,
    /// 管理者（管理 API を利用可能）
    Admin,
    /// 一般メンバー
    Member,
}

/// ユーザーエンティティ
///
/// イベント管理システムのユーザーを表現する。作成・認証情報の発行は
/// 外部コラボレータ（ドキュメントストア、認証基盤）が行い、
/// このシステムは読み取りと `profile` サブフィールドの置換のみを行う。
///
/// # 不変条件
///
/// - `password_hash` は外部公開用のシリアライズに一切含めない
/// - `profile` の更新は常に丸ごと置換（部分マージしない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    role: UserRole,
    password_hash: Option<String>,
    profile: Profile,
}

impl User {
    /// 新しいユーザーを作成する
    ///
    /// プロファイルは空のマッピングで初期化される。
    pub fn new(id: UserId, name: UserName, email: Email, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            password_hash: None,
            profile: Profile::new(),
        }
    }

    /// 既存のデータからユーザーを復元する（ドキュメントストアから取得時）
    pub fn from_store(
        id: UserId,
        name: UserName,
        email: Email,
        role: UserRole,
        password_hash: Option<String>,
        profile: Profile,
    ) -> Self {
        Self {
            id,
            name,
            email,
            role,
            password_hash,
            profile,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // ビジネスロジックメソッド

    /// 管理者か判定する
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// プロファイルを丸ごと置換した新しいインスタンスを返す
    ///
    /// 旧プロファイルのキーは一切引き継がない。
    pub fn with_profile(self, profile: Profile) -> Self {
        Self { profile, ..self }
    }

    /// 役割に応じたイベント参加リストを返す
    ///
    /// - ボランティア → `profile.events_participated`
    /// - 参加者 → `profile.events_attended`
    /// - それ以外の役割 → 空リスト
    ///
    /// リスト要素のうち文字列でないものは無視する。
    pub fn registered_event_ids(&self) -> Vec<String> {
        let key = match self.role {
            UserRole::Volunteer => PROFILE_EVENTS_PARTICIPATED,
            UserRole::Participant => PROFILE_EVENTS_ATTENDED,
            UserRole::Admin | UserRole::Member => return Vec::new(),
        };

        self.profile
            .get(key)
            .and_then(|v| v.as_array())
            .map(|ids| {
                ids.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    // フィクスチャ

    #[fixture]
    fn volunteer() -> User {
        let mut profile = Profile::new();
        profile.insert(
            PROFILE_EVENTS_PARTICIPATED.to_string(),
            json!(["0191e000-0000-7000-8000-000000000001"]),
        );
        User::from_store(
            UserId::new(),
            UserName::new("山田太郎").unwrap(),
            Email::new("volunteer@example.com").unwrap(),
            UserRole::Volunteer,
            Some("$argon2id$dummy".to_string()),
            profile,
        )
    }

    // Email のテスト

    #[test]
    fn test_メールアドレスは正常な形式を受け入れる() {
        assert!(Email::new("user@example.com").is_ok());
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("no-at-sign", "@記号なし")]
    #[case("@example.com", "ローカル部分が空")]
    #[case("user@", "ドメイン部分が空")]
    #[case(&format!("{}@example.com", "a".repeat(256)), "255文字超過")]
    fn test_メールアドレスは不正な形式を拒否する(
        #[case] input: &str,
        #[case] _reason: &str,
    ) {
        assert!(Email::new(input).is_err());
    }

    // UserRole のテスト

    #[rstest]
    #[case(UserRole::Volunteer, "volunteer")]
    #[case(UserRole::Participant, "participant")]
    #[case(UserRole::Admin, "admin")]
    #[case(UserRole::Member, "member")]
    fn test_ユーザー区分の文字列変換が正しい(
        #[case] role: UserRole,
        #[case] expected: &str,
    ) {
        assert_eq!(role.to_string(), expected);
        assert_eq!(expected.parse::<UserRole>().unwrap(), role);
    }

    #[test]
    fn test_不正なユーザー区分はパースに失敗する() {
        assert!("superuser".parse::<UserRole>().is_err());
    }

    // User のテスト

    #[rstest]
    fn test_管理者のみis_adminが真(volunteer: User) {
        assert!(!volunteer.is_admin());

        let admin = User::new(
            UserId::new(),
            UserName::new("管理者").unwrap(),
            Email::new("admin@example.com").unwrap(),
            UserRole::Admin,
        );
        assert!(admin.is_admin());
    }

    #[rstest]
    fn test_プロファイル置換で旧キーは消える(volunteer: User) {
        let mut new_profile = Profile::new();
        new_profile.insert("phone".to_string(), json!("000-0000-0000"));

        let updated = volunteer.with_profile(new_profile);

        assert!(updated.profile().get(PROFILE_EVENTS_PARTICIPATED).is_none());
        assert_eq!(updated.profile().get("phone"), Some(&json!("000-0000-0000")));
    }

    #[rstest]
    fn test_ボランティアはevents_participatedを参照する(volunteer: User) {
        assert_eq!(
            volunteer.registered_event_ids(),
            vec!["0191e000-0000-7000-8000-000000000001".to_string()]
        );
    }

    #[test]
    fn test_参加者はevents_attendedを参照する() {
        let mut profile = Profile::new();
        profile.insert(
            PROFILE_EVENTS_ATTENDED.to_string(),
            json!(["0191e000-0000-7000-8000-000000000002"]),
        );
        let participant = User::new(
            UserId::new(),
            UserName::new("参加者").unwrap(),
            Email::new("participant@example.com").unwrap(),
            UserRole::Participant,
        )
        .with_profile(profile);

        assert_eq!(
            participant.registered_event_ids(),
            vec!["0191e000-0000-7000-8000-000000000002".to_string()]
        );
    }

    #[rstest]
    #[case(UserRole::Admin)]
    #[case(UserRole::Member)]
    fn test_管理者とメンバーのイベントリストは空(#[case] role: UserRole) {
        let mut profile = Profile::new();
        profile.insert(PROFILE_EVENTS_PARTICIPATED.to_string(), json!(["x"]));
        let user = User::new(
            UserId::new(),
            UserName::new("ユーザー").unwrap(),
            Email::new("user@example.com").unwrap(),
            role,
        )
        .with_profile(profile);

        assert!(user.registered_event_ids().is_empty());
    }

    #[test]
    fn test_文字列でないリスト要素は無視する() {
        let mut profile = Profile::new();
        profile.insert(
            PROFILE_EVENTS_PARTICIPATED.to_string(),
            json!(["0191e000-0000-7000-8000-000000000003", 42, null]),
        );
        let user = User::new(
            UserId::new(),
            UserName::new("ユーザー").unwrap(),
            Email::new("user@example.com").unwrap(),
            UserRole::Volunteer,
        )
        .with_profile(profile);

        assert_eq!(
            user.registered_event_ids(),
            vec!["0191e000-0000-7000-8000-000000000003".to_string()]
        );
    }
}
