//! ユーザー向けメッセージ
//!
//! 原因（ネットワークエラー等）はここに含めずログにのみ出力する。

pub const SELECT_IMAGE_FILE: &str = "Please select an image file";
pub const SELECT_IMAGE_FIRST: &str = "Please select an image first";
pub const PROCESSING_FAILED: &str = "Failed to process image. Please try again.";
pub const PREVIEW_FAILED: &str = "Failed to read the selected image. Please choose another file.";

pub const UNKNOWN_CLASSIFICATION: &str = "Unknown classification";
pub const UNKNOWN_DESCRIPTION: &str =
    "The prediction service returned a classification this app does not recognize. No condition details are available.";
pub const UNKNOWN_CARE: &str =
    "Retake the photo in good lighting with the leaf or plant filling the frame, then analyze it again.";
