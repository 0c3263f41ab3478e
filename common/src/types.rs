//! 解析結果の型定義
//!
//! - AnalyzeRequest: 解析APIへのリクエスト
//! - ApiResponse: 解析APIの生レスポンス
//! - AnalysisResult: 正規化済みの解析結果（画面表示・CLI出力に使用）

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 空の分類ラベルに使う値
pub const UNKNOWN_CLASS: &str = "unknown";

/// 解析APIリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// "data:image/jpeg;base64,..." 形式のData URL
    pub image: String,
}

/// 解析APIの生レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default = "default_true")]
    pub success: bool,

    #[serde(default)]
    pub accident_detected: bool,

    #[serde(default)]
    pub detection: Option<RawDetection>,

    #[serde(default)]
    pub processed_image: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// 生の検出情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDetection {
    #[serde(default)]
    pub class: String,

    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub severity: Option<String>,
}

/// 検出情報（正規化済み）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class: String,

    /// 0.0〜1.0
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,

    pub accident_detected: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,

    /// 注釈付き画像（Data URL または リモートURL）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
}

impl ApiResponse {
    /// 失敗時に表示するメッセージ（error優先、次にmessage）
    pub fn failure_message(&self) -> Option<String> {
        self.error
            .iter()
            .chain(self.message.iter())
            .map(|m| m.trim())
            .find(|m| !m.is_empty())
            .map(str::to_string)
    }

    /// 正規化して AnalysisResult に変換する
    ///
    /// `success: false` は結果ではなく Error::Api として扱う。
    pub fn into_result(self) -> Result<AnalysisResult> {
        if !self.success {
            return Err(Error::Api(self.failure_message()));
        }

        Ok(AnalysisResult {
            success: true,
            accident_detected: self.accident_detected,
            detection: self.detection.map(RawDetection::normalize),
            processed_image: self.processed_image.filter(|s| !s.trim().is_empty()),
        })
    }
}

impl RawDetection {
    pub fn normalize(self) -> Detection {
        let class = self.class.trim();
        Detection {
            class: if class.is_empty() { UNKNOWN_CLASS.to_string() } else { class.to_string() },
            confidence: clamp_confidence(self.confidence),
            severity: self
                .severity
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// 解析APIのレスポンス本文をパース
pub fn parse_response(body: &str) -> Result<AnalysisResult> {
    let response: ApiResponse = serde_json::from_str(body)?;
    response.into_result()
}

/// HTTPレスポンスを ApiResponse に変換
///
/// 2xx以外はエラー。本文が解析できれば error/message を使い、
/// できなければ "API error: <status>" とする。
pub fn parse_http_response(status: u16, body: &str) -> Result<ApiResponse> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }

    let message = serde_json::from_str::<ApiResponse>(body)
        .ok()
        .and_then(|r| r.failure_message())
        .unwrap_or_else(|| format!("API error: {}", status));
    Err(Error::Api(Some(message)))
}
