//! 予測API連携（fetch + FormData）

use crate::browser_file::BrowserFile;
use cotton_common::{PredictionClient, PredictionError, PredictionResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// multipartのフィールド名
const IMAGE_FIELD: &str = "image";

pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    /// 現在の設定からクライアントを作る
    pub fn from_config() -> Self {
        Self::new(&crate::config::api_base_url())
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }
}

fn js_error(e: JsValue) -> PredictionError {
    PredictionError::Network(format!("{:?}", e))
}

/// 画像をPOSTしてJSONを受け取る
async fn post_image(endpoint: &str, file: &File) -> Result<PredictionResult, PredictionError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(js_error)?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from(form));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| PredictionError::Network("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(PredictionError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| PredictionError::InvalidResponse("response body is not text".to_string()))?;

    PredictionResult::from_json(&body).map_err(|e| PredictionError::InvalidResponse(e.to_string()))
}

impl PredictionClient<BrowserFile> for FetchClient {
    async fn predict(&self, file: &BrowserFile) -> Result<PredictionResult, PredictionError> {
        let result = post_image(&self.endpoint, file.as_file()).await;
        if let Err(e) = &result {
            gloo::console::error!(format!("Error: {}", e));
        }
        result
    }
}
