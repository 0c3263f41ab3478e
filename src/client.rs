//! reqwestによる解析APIクライアント

use accident_common::{
    parse_http_response, AnalysisApi, AnalyzeRequest, ApiResponse, ClientConfig, Error,
};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig, timeout: Duration) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::error::DetectError::Config(e.to_string()))?;

        Ok(Self {
            client,
            url: config.analyze_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AnalysisApi for HttpClient {
    async fn analyze(&self, image_data: String) -> accident_common::Result<ApiResponse> {
        tracing::debug!(url = %self.url, bytes = image_data.len(), "POST analyze");

        let response = self
            .client
            .post(&self.url)
            .json(&AnalyzeRequest { image: image_data })
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        tracing::debug!(status, "analyze response");
        parse_http_response(status, &body)
    }
}
