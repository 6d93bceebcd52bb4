//! 予測APIのベースURL
//!
//! 呼び出しのたびに解決する。優先順位:
//! 1. ページの `<meta name="cotton-api-url" content="...">`
//! 2. ビルド時の環境変数 `COTTON_API_URL`
//! 3. `http://localhost:8000`

const FALLBACK_API_URL: &str = "http://localhost:8000";
const BUILD_API_URL: Option<&str> = option_env!("COTTON_API_URL");

pub fn api_base_url() -> String {
    resolve_base_url(meta_api_url().as_deref(), BUILD_API_URL)
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name=\"cotton-api-url\"]")
        .ok()??;
    meta.get_attribute("content")
}

fn resolve_base_url(from_page: Option<&str>, from_build: Option<&str>) -> String {
    [from_page, from_build]
        .into_iter()
        .flatten()
        .map(|url| url.trim().trim_end_matches('/'))
        .find(|url| !url.is_empty())
        .unwrap_or(FALLBACK_API_URL)
        .to_string()
}
