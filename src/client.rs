//! 予測APIクライアント（reqwest）
//!
//! `POST {base_url}/predict` に multipart/form-data の `image` フィールドで画像を送信し、
//! `{ "class": string, "confidence": number }` を受け取る。

use crate::error::Result;
use cotton_common::{ImageFile, PredictionClient, PredictionError, PredictionResult};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// multipartのフィールド名
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: predict_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// ベースURLからエンドポイントを組み立てる
pub fn predict_endpoint(base_url: &str) -> String {
    format!("{}/predict", base_url.trim_end_matches('/'))
}

impl PredictionClient<ImageFile> for HttpPredictionClient {
    async fn predict(&self, file: &ImageFile) -> std::result::Result<PredictionResult, PredictionError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| PredictionError::Network(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(endpoint = %self.endpoint, file = %file.name, "POST");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        PredictionResult::from_json(&body).map_err(|e| PredictionError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_endpoint() {
        assert_eq!(predict_endpoint("http://localhost:8000"), "http://localhost:8000/predict");
        assert_eq!(predict_endpoint("http://localhost:8000/"), "http://localhost:8000/predict");
        assert_eq!(
            predict_endpoint("https://api.example.com/cotton"),
            "https://api.example.com/cotton/predict"
        );
    }

    #[test]
    fn test_client_endpoint() {
        let client = HttpPredictionClient::new("http://127.0.0.1:9/", None).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/predict");
    }
}
