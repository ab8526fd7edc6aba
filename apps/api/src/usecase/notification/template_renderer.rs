//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールをプレーンテキストで生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名は通知イベント種別ごとに固定**: テンプレートには本文のみを持たせる
//! - **添付の解決はサービス側**: レンダラーは本文と件名のみを組み立てる

use eventlink_domain::notification::{EmailMessage, NotificationError, UserNotification};
use tera::{Context, Tera};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`UserNotification` から
/// `EmailMessage`（添付未解決）を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "login_alert.txt",
                    include_str!("../../../templates/notifications/login_alert.txt"),
                ),
                (
                    "event_registration.txt",
                    include_str!("../../../templates/notifications/event_registration.txt"),
                ),
                (
                    "participant_welcome.txt",
                    include_str!("../../../templates/notifications/participant_welcome.txt"),
                ),
                (
                    "welcome.txt",
                    include_str!("../../../templates/notifications/welcome.txt"),
                ),
                (
                    "evs_document.txt",
                    include_str!("../../../templates/notifications/evs_document.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知イベントからメールメッセージを生成する
    ///
    /// `to` は呼び出し元指定のアドレス、`attachment` は未解決（None）のまま返す。
    pub fn render(&self, notification: &UserNotification) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("email", notification.recipient_email());
        if let Some(name) = notification.display_name() {
            context.insert("name", name);
        }

        let (template_name, subject) = match notification {
            UserNotification::LoginAlert { .. } => {
                ("login_alert.txt", "Login Notification - EventLink")
            }
            UserNotification::EventRegistration { .. } => {
                ("event_registration.txt", "Event Registration Confirmation")
            }
            UserNotification::ParticipantWelcome { .. } => (
                "participant_welcome.txt",
                "Welcome to EventLink - Registration",
            ),
            UserNotification::Welcome { .. } => ("welcome.txt", "Welcome to EventLink"),
            UserNotification::EvsDocument { .. } => ("evs_document.txt", "Welcome to EventLink"),
        };

        let text_body = self
            .engine
            .render(template_name, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: notification.recipient_email().to_string(),
            subject: subject.to_string(),
            text_body,
            attachment: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ログイン通知は宛名とメールアドレスを本文に含む() {
        let renderer = TemplateRenderer::new().unwrap();
        let notification = UserNotification::LoginAlert {
            name:  "Taro Yamada".to_string(),
            email: "taro@example.com".to_string(),
        };

        let email = renderer.render(&notification).unwrap();

        assert_eq!(email.subject, "Login Notification - EventLink");
        assert!(email.text_body.contains("Dear Taro Yamada"));
        assert!(email.text_body.contains("taro@example.com"));
        assert!(email.attachment.is_none());
    }

    #[test]
    fn test_イベント登録確認は固定の宛名を使う() {
        let renderer = TemplateRenderer::new().unwrap();
        let notification = UserNotification::EventRegistration {
            email: "volunteer@example.com".to_string(),
        };

        let email = renderer.render(&notification).unwrap();

        assert_eq!(email.subject, "Event Registration Confirmation");
        assert!(email.text_body.contains("Dear Volunteer"));
    }

    #[test]
    fn test_全バリアントがレンダリングできる() {
        let renderer = TemplateRenderer::new().unwrap();
        let name = "User".to_string();
        let email = "user@example.com".to_string();

        let notifications = [
            UserNotification::LoginAlert {
                name:  name.clone(),
                email: email.clone(),
            },
            UserNotification::EventRegistration {
                email: email.clone(),
            },
            UserNotification::ParticipantWelcome {
                name:  name.clone(),
                email: email.clone(),
            },
            UserNotification::Welcome {
                name:  name.clone(),
                email: email.clone(),
            },
            UserNotification::EvsDocument { name, email },
        ];

        for notification in notifications {
            assert!(renderer.render(&notification).is_ok());
        }
    }
}
