//! # リポジトリ
//!
//! ユーザー/イベントドキュメントの読み取り・更新境界を定義する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: ドキュメントストア本体は外部コラボレータ。
//!   ユースケース層はトレイト経由でのみアクセスする
//! - **インメモリ実装の同梱**: 開発環境と統合テストはインメモリ実装で動かす
//! - **プロファイルの丸ごと置換**: `update_profile` は `profile`
//!   サブフィールド以外に一切触れない

pub mod event_repository;
pub mod user_repository;

pub use event_repository::{EventRepository, InMemoryEventRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
