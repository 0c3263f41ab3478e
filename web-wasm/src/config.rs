//! ページから解析APIの設定を読み込む
//!
//! `<meta name="analysis-api-base" content="https://...">` があればそれを使う。

use accident_common::ClientConfig;

const API_BASE_META: &str = "analysis-api-base";

pub fn load_client_config() -> ClientConfig {
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten())
        .and_then(|el| el.get_attribute("content"));

    match content {
        Some(base) => {
            let config = ClientConfig::new(base);
            log::info!("analysis API: {}", config.api_base_url);
            config
        }
        None => ClientConfig::default(),
    }
}
