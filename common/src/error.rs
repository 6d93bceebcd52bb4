//! エラー型定義

use thiserror::Error;

/// ファイル選択時の検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("not an image file (type: {mime_type:?})")]
    NotAnImage { mime_type: String },
}

/// 送信開始時のエラー（リクエストは発行されない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("a prediction request is already in flight")]
    InFlight,
}

/// 予測リクエストの失敗
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// プレビュー生成の失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("preview generation failed: {0}")]
pub struct PreviewError(pub String);
