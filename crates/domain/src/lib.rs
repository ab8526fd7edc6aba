//! # EventLink ドメイン層
//!
//! イベント管理バックエンドのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: User, Event）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: Email,
//!   UserName）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ドキュメントストア、SMTP）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティと値オブジェクト
//! - [`event`] - イベントエンティティ
//! - [`notification`] - メール通知のドメインモデル

#[macro_use]
mod macros;

pub mod error;
pub mod event;
pub mod notification;
pub mod user;

pub use error::DomainError;
