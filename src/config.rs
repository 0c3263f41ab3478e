use crate::error::{DetectError, Result};
use accident_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数によるエンドポイントの上書き
pub const API_URL_ENV: &str = "ACCIDENT_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            if config.timeout_seconds == 0 {
                tracing::warn!(path = %path.display(), "timeout_seconds is 0, using 1");
                config.timeout_seconds = 1;
            }
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("accident-detect").join("config.json"))
    }

    /// 実際に使うクライアント設定
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn client_config(&self, endpoint: Option<&str>) -> ClientConfig {
        self.resolve_client_config(endpoint, std::env::var(API_URL_ENV).ok())
    }

    /// 空白のみの値は未指定として次の候補へ進む
    pub fn resolve_client_config(
        &self,
        endpoint: Option<&str>,
        env: Option<String>,
    ) -> ClientConfig {
        let given = |s: &String| !s.trim().is_empty();
        let base = endpoint
            .map(str::to_string)
            .filter(given)
            .or_else(|| env.filter(given))
            .unwrap_or_else(|| self.api_base_url.clone());
        ClientConfig::new(base)
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DetectError::Config(format!(
                "http:// または https:// で始まるURLを指定してください: {}",
                url
            )));
        }
        self.api_base_url = url;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(DetectError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}
