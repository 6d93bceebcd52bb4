//! ファイル → ワークフロー → 表示用結果
//!
//! Webと同じ状態機械を1ファイルごとに駆動する。

use crate::error::Result;
use crate::report::ScanEntry;
use crate::scanner;
use cotton_common::{render, ImageFile, PredictionClient, ResultView, UploadWorkflow};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 1ファイル分の判定結果
#[derive(Debug, Clone)]
pub struct Classification {
    pub file_name: String,
    pub preview_data_uri: Option<String>,
    /// 成功時は表示用結果、失敗時はユーザー向けメッセージ
    pub outcome: std::result::Result<ResultView, String>,
}

impl Classification {
    pub fn into_scan_entry(self, path: &Path) -> ScanEntry {
        let (result, error) = match self.outcome {
            Ok(view) => (Some(view), None),
            Err(message) => (None, Some(message)),
        };
        ScanEntry {
            file_name: self.file_name,
            file_path: path.display().to_string(),
            result,
            error,
        }
    }
}

/// 読み込み済みファイルを判定
pub async fn classify_image<C>(file: ImageFile, client: &C) -> Classification
where
    C: PredictionClient<ImageFile>,
{
    let file_name = file.name.clone();
    let mut workflow = UploadWorkflow::new();

    if let Ok(ticket) = workflow.select_file(file) {
        let data_uri = workflow.state().selected_file.as_ref().map(ImageFile::data_uri);
        if let Some(data_uri) = data_uri {
            debug!(file = %file_name, preview_len = data_uri.len(), "preview ready");
            workflow.finish_preview(ticket, Ok(data_uri));
        }
        // 失敗は state().error に反映済み
        let _ = workflow.submit(client).await;
    }

    let state = workflow.state();
    let outcome = match (&state.prediction, &state.error) {
        (Some(prediction), _) => Ok(render(prediction)),
        (None, Some(message)) => Err(message.clone()),
        (None, None) => Err(cotton_common::messages::PROCESSING_FAILED.to_string()),
    };

    Classification {
        file_name,
        preview_data_uri: state.preview_data_uri.clone(),
        outcome,
    }
}

pub async fn classify_path<C>(path: &Path, client: &C) -> Result<Classification>
where
    C: PredictionClient<ImageFile>,
{
    let file = scanner::load_image(path)?;
    Ok(classify_image(file, client).await)
}

/// フォルダ内の画像を順番に判定
pub async fn classify_folder<C>(
    folder: &Path,
    recursive: bool,
    client: &C,
    on_entry: impl FnMut(usize, usize, &ScanEntry),
) -> Result<Vec<ScanEntry>>
where
    C: PredictionClient<ImageFile>,
{
    let images = scanner::scan_folder(folder, recursive)?;
    info!(folder = %folder.display(), count = images.len(), "scanned folder");

    Ok(classify_paths(&images, client, on_entry).await)
}

/// 画像を順番に判定
///
/// 読み込めないファイルはエラー付きの結果として残し、残りの判定を続ける。
pub async fn classify_paths<C>(
    paths: &[PathBuf],
    client: &C,
    mut on_entry: impl FnMut(usize, usize, &ScanEntry),
) -> Vec<ScanEntry>
where
    C: PredictionClient<ImageFile>,
{
    let total = paths.len();
    let mut entries = Vec::with_capacity(total);
    for (idx, path) in paths.iter().enumerate() {
        let entry = match classify_path(path, client).await {
            Ok(classification) => classification.into_scan_entry(path),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "failed to load image");
                ScanEntry {
                    file_name: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    file_path: path.display().to_string(),
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        };
        on_entry(idx + 1, total, &entry);
        entries.push(entry);
    }
    entries
}
