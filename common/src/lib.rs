//! Accident Detection Common Library
//!
//! Web(WASM)とCLIで共有される型・解析フロー・ナビゲーションモデル

pub mod api;
pub mod config;
pub mod encode;
pub mod error;
pub mod nav;
pub mod preview;
pub mod state;
pub mod summary;
pub mod types;

pub use api::{analyze_image, AnalysisApi, ImageSource};
pub use config::ClientConfig;
pub use encode::{check_image_mime, to_data_url};
pub use error::{Error, Result};
pub use nav::{active_index, matches_route, NavItem, NAV_ITEMS};
pub use preview::{PreviewHandle, PreviewSlot};
pub use state::{AnalyzeState, Applied, RequestTicket};
pub use summary::{format_confidence, Summary};
pub use types::{parse_http_response, AnalysisResult, AnalyzeRequest, ApiResponse, Detection};
