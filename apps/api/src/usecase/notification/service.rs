//! # 通知サービス
//!
//! テンプレートレンダリング → 添付解決 → メール送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **失敗を伝播させない**: `send()` はどのステップで失敗しても panic や
//!   エラー伝播をせず、ログ出力のうえ `false` を返す。ルート層は戻り値で
//!   500 を判断する
//! - **添付は送信時点の存在チェック**: 設定されたパスがディスク上に
//!   存在する場合のみ添付パートを組み込み、なければテキストのみで送る
//! - **EVS はフェイルクローズ**: 添付パスが設定で解決できない場合は
//!   送信せず失敗扱いにする
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::{path::PathBuf, sync::Arc};

use eventlink_domain::notification::{NotificationError, UserNotification};
use eventlink_infra::notification::NotificationSender;

use super::TemplateRenderer;
use crate::config::NotificationConfig;

/// 通知サービス
///
/// 通知エンドポイントに伴うメールの全体フローを統合する。
pub struct NotificationService {
    sender: Arc<dyn NotificationSender>,
    renderer: TemplateRenderer,
    /// 全通知の実際の宛先（呼び出し元指定のアドレスを上書きする。
    /// 移行元の観測可能な挙動の保存 — DESIGN.md 参照）
    fixed_recipient: String,
    welcome_attachment: PathBuf,
    evs_attachment: Option<PathBuf>,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        renderer: TemplateRenderer,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            sender,
            renderer,
            fixed_recipient: config.fixed_recipient.clone(),
            welcome_attachment: config.welcome_attachment.clone(),
            evs_attachment: config.evs_attachment.clone(),
        }
    }

    /// 通知を送信する
    ///
    /// 単発の同期的試行。リトライ・キューイングは行わない。
    /// 成否を bool で返し、失敗の詳細はログにのみ出力する。
    pub async fn send(&self, notification: UserNotification) -> bool {
        let event_type: &str = notification.event_type().into();
        let requested_recipient = notification.recipient_email().to_string();

        let attachment = match self.resolve_attachment(&notification) {
            Ok(attachment) => attachment,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    notification.event_type = event_type,
                    "添付ファイルパスの解決に失敗"
                );
                return false;
            }
        };

        let mut email = match self.renderer.render(&notification) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    notification.event_type = event_type,
                    "通知テンプレートのレンダリングに失敗"
                );
                return false;
            }
        };

        email.to = self.fixed_recipient.clone();
        email.attachment = attachment;

        match self.sender.send_email(&email).await {
            Ok(()) => {
                tracing::info!(
                    notification.event_type = event_type,
                    notification.requested_recipient = %requested_recipient,
                    notification.recipient = %email.to,
                    notification.has_attachment = email.attachment.is_some(),
                    "通知メール送信成功"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    notification.event_type = event_type,
                    notification.requested_recipient = %requested_recipient,
                    "通知メール送信失敗"
                );
                false
            }
        }
    }

    /// 通知イベントに応じた添付ファイルパスを解決する
    ///
    /// 設定されたパスがディスク上に存在しない場合は添付なし（テキストのみ）。
    /// EVS の添付パスが未設定の場合はエラー（フェイルクローズ）。
    fn resolve_attachment(
        &self,
        notification: &UserNotification,
    ) -> Result<Option<PathBuf>, NotificationError> {
        let configured = match notification {
            UserNotification::ParticipantWelcome { .. } | UserNotification::Welcome { .. } => {
                Some(self.welcome_attachment.clone())
            }
            UserNotification::EvsDocument { .. } => Some(
                self.evs_attachment
                    .clone()
                    .ok_or(NotificationError::AttachmentUnresolved("EVS_ATTACHMENT_PATH"))?,
            ),
            UserNotification::LoginAlert { .. } | UserNotification::EventRegistration { .. } => {
                None
            }
        };

        Ok(match configured {
            Some(path) if path.exists() => Some(path),
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "添付ファイルが存在しないため、テキストのみで送信"
                );
                None
            }
            None => None,
        })
    }
}
