//! # ユースケース
//!
//! ハンドラから呼び出されるアプリケーションロジック。
//! プロファイル系の操作はリポジトリへの薄い委譲で済むためハンドラに置き、
//! ここにはメール通知の組み立て・送信フローのみを配置する。

pub mod notification;

pub use notification::NotificationService;
