//! 解析API連携（ブラウザ）

mod http;
mod image;

pub use http::HttpAnalysisApi;
pub use image::{BrowserImage, ObjectUrlPreview};
