//! fetch APIで解析エンドポイントを呼び出す

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use accident_common::{
    parse_http_response, AnalysisApi, AnalyzeRequest, ApiResponse, ClientConfig, Error, Result,
};

/// 解析APIクライアント
#[derive(Debug, Clone)]
pub struct HttpAnalysisApi {
    url: String,
}

impl HttpAnalysisApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { url: config.analyze_url() }
    }
}

impl AnalysisApi for HttpAnalysisApi {
    async fn analyze(&self, image_data: String) -> Result<ApiResponse> {
        let request = AnalyzeRequest { image: image_data };
        post_json(&self.url, &request).await
    }
}

/// JsValueのエラーを文字列化
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

async fn post_json(url: &str, request: &AnalyzeRequest) -> Result<ApiResponse> {
    let body = serde_json::to_string(request)
        .map_err(|e| Error::Encoding(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::Transport("window is not available".to_string()))?;

    log::debug!("POST {}", url);
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    parse_http_response(resp.status(), &text)
}
