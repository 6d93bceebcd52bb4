//! 画像読み込み・フォルダスキャンのテスト

use cotton_classifier::scanner;
use cotton_common::FileLike;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_image_detects_mime() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("LEAF.JPG");
    fs::write(&path, b"\xFF\xD8\xFFdummy").unwrap();

    let file = scanner::load_image(&path).unwrap();
    assert_eq!(file.name, "LEAF.JPG");
    assert_eq!(file.mime_type, "image/jpeg");
    assert_eq!(file.size(), 8);
    assert!(file.is_image());
}

#[test]
fn test_load_non_image_is_not_rejected_here() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b").unwrap();

    let file = scanner::load_image(&path).unwrap();
    assert_eq!(file.mime_type, "application/octet-stream");
    assert!(!file.is_image());
}

#[test]
fn test_scan_folder_filters_and_sorts() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("c.webp"), b"x").unwrap();
    fs::write(dir.path().join("a.png"), b"x").unwrap();
    fs::write(dir.path().join("b.JPEG"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let images = scanner::scan_folder(dir.path(), false).unwrap();
    let names: Vec<String> = images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.png", "b.JPEG", "c.webp"]);
}

#[test]
fn test_scan_folder_recursive() {
    let dir = tempdir().expect("Failed to create temp dir");
    let sub = dir.path().join("field-2");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("top.png"), b"x").unwrap();
    fs::write(sub.join("nested.png"), b"x").unwrap();

    assert_eq!(scanner::scan_folder(dir.path(), false).unwrap().len(), 1);
    assert_eq!(scanner::scan_folder(dir.path(), true).unwrap().len(), 2);
}
