use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// API URLの環境変数（設定ファイルより優先）
pub const API_URL_ENV: &str = "COTTON_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込めない場合は警告して既定値を使う
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!(error = %e, "config path unavailable; using defaults");
                Self::default()
            }
        }
    }

    fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "failed to read config; using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClassifierError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cotton-classifier").join("config.json"))
    }

    /// 予測APIのベースURL（呼び出し時に解決する）
    pub fn api_url(&self) -> Result<String> {
        // 環境変数を優先
        let from_env = std::env::var(API_URL_ENV).ok();
        resolve_api_url(from_env.as_deref(), self.api_url.as_deref())
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        let normalized = normalize_base_url(&url)
            .ok_or_else(|| ClassifierError::Config(format!("URLが不正です: {}", url)))?;
        self.api_url = Some(normalized);
        self.save()
    }
}

fn resolve_api_url(from_env: Option<&str>, from_file: Option<&str>) -> Result<String> {
    from_env
        .and_then(normalize_base_url)
        .or_else(|| from_file.and_then(normalize_base_url))
        .ok_or(ClassifierError::MissingApiUrl)
}

/// 末尾のスラッシュを除去。空やhttp(s)以外はNone
pub fn normalize_base_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}
