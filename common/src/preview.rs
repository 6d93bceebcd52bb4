//! プレビュー用Data URI
//!
//! ブラウザの `FileReader.readAsDataURL` と同じ `data:<mime>;base64,<payload>` 形式

use base64::{engine::general_purpose::STANDARD, Engine};

/// バイト列をData URIに変換
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Data URIを (MIMEタイプ, Base64データ) に分解
///
/// # Arguments
/// * `data_uri` - "data:image/png;base64,iVBORw0..." 形式のData URI
///
/// # Returns
/// base64形式でない場合はNone
pub fn split_data_uri(data_uri: &str) -> Option<(&str, &str)> {
    let rest = data_uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime_type = meta.strip_suffix(";base64")?;
    Some((mime_type, payload))
}
