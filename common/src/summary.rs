//! 解析結果のサマリー表示
//!
//! Web画面とCLIで同じ文言を使うため、表示行をここで組み立てる。

use crate::types::AnalysisResult;

/// 重大度が無い場合の表示
pub const SEVERITY_PLACEHOLDER: &str = "N/A";

/// 信頼度をパーセント表記（小数1桁）に変換
///
/// 0.87 → "87.0%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// 検出詳細の表示行
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionLines {
    pub kind: String,
    pub confidence: String,
    pub severity: String,
}

/// 解析結果のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub accident_line: String,
    pub detection: Option<DetectionLines>,
    pub processed_image: Option<String>,
}

impl Summary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let accident_line = format!(
            "Accident Detected: {}",
            if result.accident_detected { "Yes" } else { "No" }
        );

        // 事故ありの場合のみ詳細を出す
        let detection = result
            .detection
            .as_ref()
            .filter(|_| result.accident_detected)
            .map(|d| DetectionLines {
                kind: format!("Type: {}", d.class),
                confidence: format!("Confidence: {}", format_confidence(d.confidence)),
                severity: format!(
                    "Severity: {}",
                    d.severity.as_deref().unwrap_or(SEVERITY_PLACEHOLDER)
                ),
            });

        Self {
            accident_line,
            detection,
            processed_image: result.processed_image.clone(),
        }
    }

    /// テキスト行として列挙（CLI出力用）
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.accident_line.clone()];
        if let Some(d) = &self.detection {
            lines.push(d.kind.clone());
            lines.push(d.confidence.clone());
            lines.push(d.severity.clone());
        }
        if let Some(image) = &self.processed_image {
            lines.push(format!("Processed Image: {}", abbreviate(image)));
        }
        lines
    }
}

/// Data URLは長すぎるので先頭だけ表示
fn abbreviate(image: &str) -> String {
    const MAX: usize = 64;
    if image.starts_with("data:") && image.chars().count() > MAX {
        let head: String = image.chars().take(MAX).collect();
        format!("{}... ({} chars)", head, image.len())
    } else {
        image.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Detection;

    fn detected(severity: Option<&str>) -> AnalysisResult {
        AnalysisResult {
            success: true,
            accident_detected: true,
            detection: Some(Detection {
                class: "collision".to_string(),
                confidence: 0.87,
                severity: severity.map(str::to_string),
            }),
            processed_image: None,
        }
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.1234), "12.3%");
    }

    #[test]
    fn test_no_accident() {
        let result = AnalysisResult { success: true, ..Default::default() };
        let summary = Summary::from_result(&result);
        assert_eq!(summary.accident_line, "Accident Detected: No");
        assert!(summary.detection.is_none());
        assert_eq!(summary.lines(), vec!["Accident Detected: No"]);
    }

    #[test]
    fn test_detection_lines() {
        let summary = Summary::from_result(&detected(Some("high")));
        assert_eq!(summary.accident_line, "Accident Detected: Yes");
        let d = summary.detection.expect("詳細なし");
        assert_eq!(d.kind, "Type: collision");
        assert_eq!(d.confidence, "Confidence: 87.0%");
        assert_eq!(d.severity, "Severity: high");
    }

    #[test]
    fn test_missing_severity() {
        let summary = Summary::from_result(&detected(None));
        assert_eq!(summary.detection.expect("詳細なし").severity, "Severity: N/A");
    }

    #[test]
    fn test_detection_hidden_when_not_accident() {
        let mut result = detected(Some("low"));
        result.accident_detected = false;
        assert!(Summary::from_result(&result).detection.is_none());
    }

    #[test]
    fn test_accident_without_detection() {
        let result = AnalysisResult { success: true, accident_detected: true, ..Default::default() };
        let summary = Summary::from_result(&result);
        assert_eq!(summary.accident_line, "Accident Detected: Yes");
        assert!(summary.detection.is_none());
    }

    #[test]
    fn test_processed_image_line() {
        let mut result = detected(Some("high"));
        result.processed_image = Some("https://example.com/out.png".to_string());
        let lines = Summary::from_result(&result).lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "Processed Image: https://example.com/out.png");

        result.processed_image = Some(format!("data:image/png;base64,{}", "A".repeat(200)));
        let lines = Summary::from_result(&result).lines();
        assert!(lines[4].ends_with("chars)"));
    }
}
