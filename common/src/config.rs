//! 解析APIクライアントの設定

use serde::{Deserialize, Serialize};

/// デフォルトのAPIベースURL（同一オリジンのリバースプロキシ想定）
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "analyze";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_string() }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        if api_base_url.trim().is_empty() {
            Self::default()
        } else {
            Self { api_base_url: api_base_url.trim().to_string() }
        }
    }

    /// 解析エンドポイントのURL
    pub fn analyze_url(&self) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), ANALYZE_PATH)
    }
}
