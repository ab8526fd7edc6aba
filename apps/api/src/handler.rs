//! # ハンドラ
//!
//! HTTP リクエストハンドラを提供する。
//!
//! ## エンドポイント
//!
//! | パス | メソッド | 認可 | ハンドラ |
//! |------|---------|------|---------|
//! | `/health` | GET | なし | [`health::health_check`] |
//! | `/profile` | GET | 認証 | [`profile::get_profile`] |
//! | `/profile` | PUT | 認証 | [`profile::update_profile`] |
//! | `/events` | GET | 認証 | [`event::list_my_events`] |
//! | `/users` | GET | 管理者 | [`user::list_users`] |
//! | `/users/{user_id}` | GET | 管理者 | [`user::get_user`] |
//! | `/auth/login` | POST | なし | [`notification::send_login_alert`] |
//! | `/events/participant` | POST | なし | [`notification::send_participant_welcome`] |
//! | `/events/register` | POST | なし | [`notification::send_event_registration`] |
//! | `/auth/send_attachment` | POST | なし | [`notification::send_welcome`] |
//! | `/auth/send_evs` | POST | なし | [`notification::send_evs_document`] |
//! | `/download/{filename}` | GET | なし | [`download::download_file`] |

pub mod download;
pub mod event;
pub mod health;
pub mod notification;
pub mod profile;
pub mod user;
