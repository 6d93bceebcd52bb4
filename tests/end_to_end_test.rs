//! ファイル選択 → 送信 → 結果表示の一連の流れ

mod support;

use cotton_classifier::classify;
use cotton_classifier::client::HttpPredictionClient;
use cotton_common::{lookup_info, messages, split_data_uri, ConfidenceTier};
use support::{fake_png, FakeServer};
use tempfile::tempdir;

/// 50KBのPNG → fresh cotton leaf (0.92)
#[tokio::test]
async fn test_png_50kb_fresh_leaf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("leaf.png");
    std::fs::write(&path, fake_png(50 * 1024)).unwrap();

    let server = FakeServer::start(1, "200 OK", r#"{"class":"fresh cotton leaf","confidence":0.92}"#).await;
    let client = HttpPredictionClient::new(&server.base_url, None).unwrap();

    let classification = classify::classify_path(&path, &client).await.expect("判定失敗");

    let view = classification.outcome.expect("結果がない");
    let info = lookup_info("fresh cotton leaf").unwrap();
    assert!(!view.is_diseased);
    assert_eq!(view.tier, ConfidenceTier::High);
    assert_eq!(view.confidence_percent_text, "92.0%");
    assert_eq!(view.description, info.description);
    assert_eq!(view.care, info.care);

    let preview = classification.preview_data_uri.expect("プレビューがない");
    let (mime, _) = split_data_uri(&preview).unwrap();
    assert_eq!(mime, "image/png");

    // ファイル全体が送信されている
    let requests = server.requests().await;
    assert!(requests[0].len() > 50 * 1024);
}

/// 画像以外のファイルは送信されない
#[tokio::test]
async fn test_non_image_file_not_sent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    let server = FakeServer::start(1, "200 OK", r#"{"class":"fresh cotton leaf","confidence":0.92}"#).await;
    let client = HttpPredictionClient::new(&server.base_url, None).unwrap();

    let classification = classify::classify_path(&path, &client).await.unwrap();
    assert_eq!(classification.outcome.unwrap_err(), messages::SELECT_IMAGE_FILE);
    assert!(classification.preview_data_uri.is_none());
}

/// 未知のラベルはフォールバック表示
#[tokio::test]
async fn test_unknown_label_fallback() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("boll.jpg");
    std::fs::write(&path, fake_png(256)).unwrap();

    let server = FakeServer::start(1, "200 OK", r#"{"class":"cotton boll","confidence":0.55}"#).await;
    let client = HttpPredictionClient::new(&server.base_url, None).unwrap();

    let view = classify::classify_path(&path, &client).await.unwrap().outcome.unwrap();
    assert!(!view.known);
    assert_eq!(view.title(), messages::UNKNOWN_CLASSIFICATION);
    assert_eq!(view.tier, ConfidenceTier::Low);
}

/// フォルダ判定（画像のみ、ファイル名順）
#[tokio::test]
async fn test_classify_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("b.jpg"), fake_png(128)).unwrap();
    std::fs::write(dir.path().join("a.png"), fake_png(128)).unwrap();
    std::fs::write(dir.path().join("readme.txt"), "text").unwrap();

    let server = FakeServer::start(2, "200 OK", r#"{"class":"diseased cotton plant","confidence":0.81}"#).await;
    let client = HttpPredictionClient::new(&server.base_url, None).unwrap();

    let mut progress = Vec::new();
    let entries = classify::classify_folder(dir.path(), false, &client, |current, total, _| {
        progress.push((current, total));
    })
    .await
    .unwrap();

    assert_eq!(progress, vec![(1, 2), (2, 2)]);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].file_name, "a.png");
    assert_eq!(entries[1].file_name, "b.jpg");
    assert!(entries.iter().all(|e| e.result.as_ref().is_some_and(|v| v.is_diseased)));

    assert_eq!(server.requests().await.len(), 2);
}

/// 読み込めないファイルがあっても残りの判定を続ける
#[tokio::test]
async fn test_unreadable_entry_does_not_abort_scan() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("a.png");
    let removed = dir.path().join("b.png");
    let last = dir.path().join("c.png");
    std::fs::write(&first, fake_png(128)).unwrap();
    std::fs::write(&last, fake_png(128)).unwrap();

    let server = FakeServer::start(2, "200 OK", r#"{"class":"fresh cotton plant","confidence":0.88}"#).await;
    let client = HttpPredictionClient::new(&server.base_url, None).unwrap();

    // 走査後に削除されたファイルを含む
    let paths = vec![first, removed, last];
    let mut progress = Vec::new();
    let entries = classify::classify_paths(&paths, &client, |current, total, _| {
        progress.push((current, total));
    })
    .await;

    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
    assert_eq!(entries.len(), 3);
    assert!(entries[0].result.is_some());
    assert_eq!(entries[1].file_name, "b.png");
    assert!(entries[1].result.is_none());
    assert!(entries[1].error.as_deref().is_some_and(|e| e.contains("b.png")));
    assert!(entries[2].result.is_some());

    assert_eq!(server.requests().await.len(), 2);
}
