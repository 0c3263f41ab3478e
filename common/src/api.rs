//! 解析APIとの連携
//!
//! 画像ソース（ブラウザのFile、ローカルファイル）と解析APIクライアント
//! （fetch、reqwest）をトレイトで抽象化し、エンコード→送信の順序を共通化する。

use std::future::Future;
use crate::error::Result;
use crate::types::{AnalysisResult, ApiResponse};

/// 解析対象の画像
pub trait ImageSource {
    /// ファイル名（ログ用）
    fn name(&self) -> String;

    /// 転送用のData URLにエンコード
    fn encode(&self) -> impl Future<Output = Result<String>>;
}

/// 外部の解析API
pub trait AnalysisApi {
    /// Data URLを送信し、生レスポンスを返す
    fn analyze(&self, image_data: String) -> impl Future<Output = Result<ApiResponse>>;
}

/// 画像を1回だけエンコードし、1回だけ送信して正規化済みの結果を返す
pub async fn analyze_image<S, A>(source: &S, api: &A) -> Result<AnalysisResult>
where
    S: ImageSource,
    A: AnalysisApi,
{
    let name = source.name();
    let image_data = source.encode().await?;
    log::debug!("encoded {} ({} chars)", name, image_data.len());

    let response = api.analyze(image_data).await?;
    let result = response.into_result()?;
    log::info!(
        "analysis finished for {}: accident_detected={}",
        name,
        result.accident_detected
    );
    Ok(result)
}
