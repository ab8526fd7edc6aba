//! # テスト用モック送信
//!
//! 統合テストで使用するインメモリのモック通知送信。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! eventlink-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventlink_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// モック通知送信
///
/// 送信されたメッセージを記録する。`failing()` で作成すると
/// すべての送信が失敗する（ダウンストリーム障害のシミュレーション）。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:        Arc<Mutex<Vec<EmailMessage>>>,
    should_fail: bool,
}

impl MockNotificationSender {
    /// 常に成功するモックを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に失敗するモックを作成する
    pub fn failing() -> Self {
        Self {
            sent:        Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// 送信されたメッセージの一覧を返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.should_fail {
            return Err(NotificationError::SendFailed(
                "モック送信失敗".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            to: "test@example.com".to_string(),
            subject: "件名".to_string(),
            text_body: "本文".to_string(),
            attachment: None,
        }
    }

    #[tokio::test]
    async fn test_送信したメッセージが記録される() {
        let sender = MockNotificationSender::new();

        sender.send_email(&make_email()).await.unwrap();

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "test@example.com");
    }

    #[tokio::test]
    async fn test_failingモックは常に失敗する() {
        let sender = MockNotificationSender::failing();

        let result = sender.send_email(&make_email()).await;

        assert!(result.is_err());
        assert!(sender.sent_emails().is_empty());
    }
}
