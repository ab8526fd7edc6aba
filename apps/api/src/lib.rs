//! # EventLink API
//!
//! イベント管理アプリケーションの HTTP バックエンド。
//!
//! ## 提供する API
//!
//! - **プロファイル**: 取得・更新（プロファイルの丸ごと置換）
//! - **イベント**: ユーザーが登録したイベントの一覧
//! - **管理**: ユーザー一覧・個別取得（管理者のみ）
//! - **通知**: ログイン通知、イベント登録確認、ウェルカム（添付あり）、
//!   EVS ドキュメント送付の各メール
//! - **ダウンロード**: 設定ディレクトリ配下のファイル配信
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - DI とルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - 認証・認可ミドルウェア
//! - [`usecase`] - 通知サービス（テンプレート + 送信）

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod state;
pub mod usecase;
