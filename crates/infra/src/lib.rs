//! # EventLink インフラ層
//!
//! ドメイン層の永続化境界と外部サービス接続を提供する。
//!
//! ## モジュール構成
//!
//! - [`repository`] - ユーザー/イベントのリポジトリトレイトとインメモリ実装
//! - [`session`] - ベアラートークンをユーザー ID に解決するセッションストア
//! - [`notification`] - メール送信（SMTP / Noop）
//! - [`error`] - インフラ層エラー
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: ドキュメントストアと認証基盤は外部コラボレータ。
//!   ここではその接続境界だけをトレイトとして定義し、開発・テスト用の
//!   インメモリ実装を同梱する
//! - **送信バックエンド切替**: `NOTIFICATION_BACKEND`（smtp / noop）で
//!   ランタイム選択

pub mod error;
pub mod notification;
pub mod repository;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
