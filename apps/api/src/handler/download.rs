//! # ダウンロードハンドラ
//!
//! 設定ディレクトリ配下のファイルを添付ダウンロードとして配信する。
//!
//! ## エンドポイント
//!
//! - `GET /download/{filename}` - 設定ディレクトリ直下のファイルを返す
//!
//! ## パス検証
//!
//! `filename` はディレクトリ直下の単一ファイル名のみを受け付ける。
//! パス区切り文字や `..` を含む名前は配信ディレクトリ外への到達を
//! 防ぐため 404 として扱う。

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{error::ApiError, state::AppState};

/// GET /download/{filename}
///
/// 設定ディレクトリ直下のファイルをバイナリで返す。
///
/// ## レスポンス
///
/// - `200 OK`: `Content-Disposition: attachment` 付きのファイル内容
/// - `404 Not Found`: ファイルが存在しない、または名前が不正
#[tracing::instrument(skip_all, fields(%filename))]
pub async fn download_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let not_found = || ApiError::NotFound("File not found".to_string());

    if !is_safe_filename(&filename) {
        tracing::warn!(filename = %filename, "不正なファイル名のダウンロード要求を拒否");
        return Err(not_found());
    }

    let path = state.downloads_dir.join(&filename);

    let content = tokio::fs::read(&path).await.map_err(|_| not_found())?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    ))
}

/// ディレクトリ直下の単一ファイル名として安全か判定する
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}
