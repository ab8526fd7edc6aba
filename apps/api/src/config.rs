//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! 設定はプロセス起動時に一度だけ構築し、以降は参照渡しする。
//! ビジネスロジック内で環境変数を直接読むことはしない。

use std::{env, path::PathBuf};

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// ダウンロード配信ディレクトリ
    pub downloads_dir: PathBuf,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: メール投稿ホスト経由で送信（デフォルト）
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド（"smtp" | "noop"）
    pub backend: String,
    /// メール投稿ホスト（backend=smtp の場合に使用）
    pub smtp_host: String,
    /// メール投稿ポート（implicit TLS、通常 465）
    pub smtp_port: u16,
    /// 送信元メールアドレス
    pub sender_address: String,
    /// 送信元クレデンシャル
    pub sender_password: String,
    /// 全通知の実際の宛先となる固定アドレス
    ///
    /// 移行元システムはすべての通知を呼び出し元指定のアドレスではなく
    /// この固定アドレスに送っていた。現状の観測可能な挙動を保存している
    /// （DESIGN.md の Open Question 参照）。
    pub fixed_recipient: String,
    /// ウェルカム系通知の添付ファイルパス
    pub welcome_attachment: PathBuf,
    /// EVS ドキュメントの添付ファイルパス
    ///
    /// デフォルトを持たない。未設定のまま EVS 送信を要求すると
    /// フェイルクローズで送信失敗になる。
    pub evs_attachment: Option<PathBuf>,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            downloads_dir: env::var("DOWNLOAD_DIR")
                .unwrap_or_else(|_| "downloads".to_string())
                .into(),
            notification: NotificationConfig::from_env(),
        })
    }
}

impl NotificationConfig {
    /// 環境変数から通知設定を読み込む
    fn from_env() -> Self {
        Self {
            backend: env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| "smtp".to_string()),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            sender_address: env::var("EMAIL_SENDER")
                .unwrap_or_else(|_| "eventlink.demo@gmail.com".to_string()),
            sender_password: env::var("EMAIL_PASSWORD").unwrap_or_else(|_| "change-me".to_string()),
            fixed_recipient: env::var("NOTIFICATION_RECIPIENT")
                .unwrap_or_else(|_| "notifications.dev@eventlink.example.com".to_string()),
            welcome_attachment: env::var("WELCOME_ATTACHMENT_PATH")
                .unwrap_or_else(|_| "assets/welcome_guide.pdf".to_string())
                .into(),
            evs_attachment: env::var("EVS_ATTACHMENT_PATH").ok().map(PathBuf::from),
        }
    }
}
