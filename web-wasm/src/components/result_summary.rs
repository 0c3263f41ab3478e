//! 解析結果サマリーコンポーネント

use leptos::prelude::*;
use accident_common::{AnalysisResult, Summary};

#[component]
pub fn ResultSummary(result: AnalysisResult) -> impl IntoView {
    let status_class = if result.accident_detected {
        "status status-alert"
    } else {
        "status status-ok"
    };
    let summary = Summary::from_result(&result);

    view! {
        <div class="result-summary">
            <h3>"Analysis Result"</h3>
            <p class=status_class>{summary.accident_line}</p>
            {summary.detection.map(|d| view! {
                <div class="detection">
                    <p>{d.kind}</p>
                    <p>{d.confidence}</p>
                    <p>{d.severity}</p>
                </div>
            })}
            {summary.processed_image.map(|src| view! {
                <div class="processed-image">
                    <img src=src alt="Processed result" />
                </div>
            })}
        </div>
    }
}
