//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`UserNotification`] | ユーザー通知イベント | 5 種類: ログイン通知、イベント登録確認、参加者ウェルカム、ウェルカム、EVS ドキュメント |
//! | [`EmailMessage`] | メールメッセージ | リクエストごとに構築・破棄され、永続化しない |
//!
//! ## 設計方針
//!
//! - **enum による通知イベント**: 各バリアントが通知エンドポイントに対応
//! - **テンプレート分離**: 通知イベントとメール生成は分離（TemplateRenderer は api）
//! - **添付は任意の単一ファイル**: パスで指し、読み込みは送信時に行う

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),

    /// 添付ファイルパスが設定で解決できない
    ///
    /// EVS 添付のパスは設定必須だがデフォルトを持たない。
    /// 未設定のまま送信要求された場合はフェイルクローズでこのエラーになる。
    #[error("添付ファイルパスが未設定: {0}")]
    AttachmentUnresolved(&'static str),
}

/// 通知イベント種別
///
/// ログ出力の `notification.event_type` フィールドに使用する。
/// snake_case でシリアライズされる。
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
#[strum(serialize_all = "snake_case")]
pub enum NotificationEventType {
    /// ログイン通知: ログイン成功時 → 本人に送信
    LoginAlert,
    /// イベント登録確認: イベント申込時
    EventRegistration,
    /// 参加者ウェルカム（添付あり）: 参加者登録時
    ParticipantWelcome,
    /// ウェルカム（添付あり）: 汎用ウェルカム送信
    Welcome,
    /// EVS ドキュメント送付
    EvsDocument,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
/// `attachment` が Some の場合、送信側がファイルを読み込んで
/// base64 エンコードの添付パートとして組み込む。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:         String,
    /// 件名
    pub subject:    String,
    /// プレーンテキスト本文
    pub text_body:  String,
    /// 添付ファイルのパス（任意・単一）
    pub attachment: Option<PathBuf>,
}

/// ユーザー通知イベント
///
/// 各バリアントが通知エンドポイント（5 種類）に対応する。
/// `recipient_email` は呼び出し元が指定したアドレスを保持するが、
/// 実際の宛先は送信時に設定の固定アドレスで上書きされる（DESIGN.md 参照）。
#[derive(Debug, Clone)]
pub enum UserNotification {
    /// ログイン通知
    LoginAlert { name: String, email: String },
    /// イベント登録確認
    EventRegistration { email: String },
    /// 参加者ウェルカム（添付あり）
    ParticipantWelcome { name: String, email: String },
    /// 汎用ウェルカム（添付あり）
    Welcome { name: String, email: String },
    /// EVS ドキュメント送付
    EvsDocument { name: String, email: String },
}

impl UserNotification {
    /// 通知イベント種別を返す
    pub fn event_type(&self) -> NotificationEventType {
        match self {
            Self::LoginAlert { .. } => NotificationEventType::LoginAlert,
            Self::EventRegistration { .. } => NotificationEventType::EventRegistration,
            Self::ParticipantWelcome { .. } => NotificationEventType::ParticipantWelcome,
            Self::Welcome { .. } => NotificationEventType::Welcome,
            Self::EvsDocument { .. } => NotificationEventType::EvsDocument,
        }
    }

    /// 呼び出し元が指定した受信者のメールアドレスを返す
    pub fn recipient_email(&self) -> &str {
        match self {
            Self::LoginAlert { email, .. }
            | Self::EventRegistration { email }
            | Self::ParticipantWelcome { email, .. }
            | Self::Welcome { email, .. }
            | Self::EvsDocument { email, .. } => email,
        }
    }

    /// 宛名として使う表示名を返す
    ///
    /// イベント登録確認は宛名を持たない（"Volunteer" 固定文面）。
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::LoginAlert { name, .. }
            | Self::ParticipantWelcome { name, .. }
            | Self::Welcome { name, .. }
            | Self::EvsDocument { name, .. } => Some(name),
            Self::EventRegistration { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_通知イベント種別の文字列変換が正しい() {
        assert_eq!(NotificationEventType::LoginAlert.to_string(), "login_alert");
        assert_eq!(
            NotificationEventType::EventRegistration.to_string(),
            "event_registration"
        );
        assert_eq!(
            NotificationEventType::ParticipantWelcome.to_string(),
            "participant_welcome"
        );
        assert_eq!(NotificationEventType::Welcome.to_string(), "welcome");
        assert_eq!(
            NotificationEventType::EvsDocument.to_string(),
            "evs_document"
        );

        assert_eq!(
            NotificationEventType::from_str("login_alert").unwrap(),
            NotificationEventType::LoginAlert
        );
    }

    #[test]
    fn test_event_typeが各バリアントで正しい値を返す() {
        let login = UserNotification::LoginAlert {
            name:  "山田".to_string(),
            email: "user@example.com".to_string(),
        };
        assert_eq!(login.event_type(), NotificationEventType::LoginAlert);

        let registration = UserNotification::EventRegistration {
            email: "user@example.com".to_string(),
        };
        assert_eq!(
            registration.event_type(),
            NotificationEventType::EventRegistration
        );
    }

    #[test]
    fn test_recipient_emailが呼び出し元指定のアドレスを返す() {
        let welcome = UserNotification::Welcome {
            name:  "山田".to_string(),
            email: "welcome@example.com".to_string(),
        };
        assert_eq!(welcome.recipient_email(), "welcome@example.com");
    }

    #[test]
    fn test_イベント登録確認は宛名を持たない() {
        let registration = UserNotification::EventRegistration {
            email: "user@example.com".to_string(),
        };
        assert_eq!(registration.display_name(), None);
    }
}
