//! ダウンロードルートの統合テスト
//!
//! ## テストケース
//!
//! - 実在ファイルの配信（ヘッダと内容）
//! - 存在しないファイルで 404
//! - パストラバーサルの拒否

mod common;

use axum::{
    body::to_bytes,
    http::{Method, StatusCode, header},
};
use common::{TestAppOptions, build_test_app, response_json, send_request};
use pretty_assertions::assert_eq;

/// 一時ダウンロードディレクトリとファイルを作成する
async fn create_downloads_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("eventlink-downloads-{}", uuid::Uuid::now_v7()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(dir.join("report.pdf"), b"%PDF-1.4 report")
        .await
        .unwrap();
    dir
}

#[tokio::test]
async fn test_実在ファイルを添付ダウンロードとして配信する() {
    let dir = create_downloads_dir().await;
    let (app, _) = build_test_app(TestAppOptions {
        downloads_dir: dir.clone(),
        ..TestAppOptions::default()
    })
    .await;

    let response = send_request(app, Method::GET, "/download/report.pdf", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"report.pdf\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4 report");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_存在しないファイルは404を返す() {
    let dir = create_downloads_dir().await;
    let (app, _) = build_test_app(TestAppOptions {
        downloads_dir: dir.clone(),
        ..TestAppOptions::default()
    })
    .await;

    let response = send_request(app, Method::GET, "/download/missing.pdf", None, None).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "File not found");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_パストラバーサルは404を返す() {
    let dir = create_downloads_dir().await;
    let (app, _) = build_test_app(TestAppOptions {
        downloads_dir: dir.clone(),
        ..TestAppOptions::default()
    })
    .await;

    // パス区切りはルーティングで一致しないため、.. を含む単一セグメントで検証
    let response = send_request(app, Method::GET, "/download/..report.pdf", None, None).await;
    let (status, _) = response_json(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
