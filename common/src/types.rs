//! 予測結果・アップロードファイルの型定義
//!
//! - PredictionResult: 予測サービスのレスポンス
//! - FileLike: ワークフローが扱うファイルの最小インターフェース
//! - ImageFile: バイト列を保持するファイル（CLI用）

use serde::{Deserialize, Serialize};

/// 予測サービスのレスポンス `{ "class": string, "confidence": number }`
///
/// `class` が既知ラベルかどうかはここでは検証しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// レスポンスボディ(JSON文字列)をパース
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

/// ワークフローに渡せるファイル
///
/// ブラウザの `File` とCLIの `ImageFile` の両方を同じ状態機械で扱うための境界。
pub trait FileLike {
    fn name(&self) -> String;

    /// 宣言されたMIMEタイプ（例: "image/png"）。不明の場合は空文字
    fn mime_type(&self) -> String;

    fn size(&self) -> u64;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

/// メモリ上の画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// プレビュー用のData URI
    pub fn data_uri(&self) -> String {
        crate::preview::encode_data_uri(&self.mime_type, &self.bytes)
    }
}

impl FileLike for ImageFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
