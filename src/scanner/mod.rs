use crate::error::{ClassifierError, Result};
use cotton_common::ImageFile;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// 拡張子 → MIMEタイプ
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

const UNKNOWN_MIME: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを判定（大文字小文字は区別しない）
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| {
            IMAGE_TYPES
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(UNKNOWN_MIME)
}

/// ファイルを読み込む
///
/// 画像かどうかはここでは判定しない（ワークフローが検証する）。
pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(ClassifierError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = mime_for_path(path);

    debug!(file = %file_name, mime_type, size = bytes.len(), "loaded file");
    Ok(ImageFile::new(file_name, mime_type, bytes))
}

/// フォルダ内の画像を列挙（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ClassifierError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut images: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && mime_for_path(path) != UNKNOWN_MIME)
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(images)
}
