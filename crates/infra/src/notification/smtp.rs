//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! メール投稿ホストにポート 465 の implicit TLS で接続し、
//! 送信元クレデンシャルで認証する。

use async_trait::async_trait;
use eventlink_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Attachment, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 送信は単発の同期的試行で、タイムアウトはライブラリデフォルトに従う。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: メール投稿ホスト名（例: "smtp.gmail.com"）
    /// - `port`: ポート番号（implicit TLS、通常 465）
    /// - `from_address`: 送信元メールアドレス
    /// - `username` / `password`: 送信元クレデンシャル
    pub fn new(
        host: &str,
        port: u16,
        from_address: String,
        username: String,
        password: String,
    ) -> Result<Self, NotificationError> {
        // relay: implicit TLS（SMTPS）で接続する
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 接続設定が不正: {e}")))?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self {
            transport,
            from_address,
        })
    }
}

/// `EmailMessage` から lettre メッセージを構築する
///
/// 常に multipart/mixed: プレーンテキストパート + 任意の添付パート。
/// 添付の disposition filename はパスのベース名を使用する。
pub(crate) async fn build_message(
    email: &EmailMessage,
    from_address: &str,
) -> Result<Message, NotificationError> {
    let mut multipart = MultiPart::mixed().singlepart(
        SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone()),
    );

    if let Some(path) = &email.attachment {
        let content = tokio::fs::read(path).await.map_err(|e| {
            NotificationError::SendFailed(format!(
                "添付ファイルの読み込みに失敗 ({}): {e}",
                path.display()
            ))
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| NotificationError::SendFailed(format!("Content-Type 不正: {e}")))?;

        multipart = multipart.singlepart(Attachment::new(filename).body(content, content_type));
    }

    Message::builder()
        .from(
            from_address
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?,
        )
        .to(email
            .to
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
        .subject(&email.subject)
        .multipart(multipart)
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = build_message(email, &self.from_address).await?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
