//! エラー型定義
//!
//! 解析フローの失敗はすべて1回の試行で終端し、画面上にインライン表示される。

use thiserror::Error;

/// ファイル未選択時のメッセージ
pub const NO_FILE_MESSAGE: &str = "Please select an image first.";

/// 画像以外のファイルが選ばれた時のメッセージ
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please choose an image file.";

/// メッセージが得られない失敗に対するフォールバック
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// 検証エラー: ファイル未選択（ネットワークには触れない）
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// 検証エラー: MIMEタイプが image/* ではない
    #[error("{}: {}", NOT_AN_IMAGE_MESSAGE, .0)]
    NotAnImage(String),

    /// ファイル読み込み・エンコード失敗
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// 通信エラー
    #[error("Transport error: {0}")]
    Transport(String),

    /// APIが失敗を返した（メッセージは任意）
    #[error("API error: {}", .0.as_deref().unwrap_or("no message"))]
    Api(Option<String>),
}

impl Error {
    /// 画面に表示する文言
    pub fn user_message(&self) -> String {
        match self {
            Error::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            Error::NotAnImage(_) => NOT_AN_IMAGE_MESSAGE.to_string(),
            Error::Encoding(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Error::Transport(msg) => non_empty(Some(msg)),
            Error::Api(msg) => non_empty(msg.as_ref()),
        }
    }
}

fn non_empty(msg: Option<&String>) -> String {
    match msg.map(|m| m.trim()) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Api(Some(format!("Invalid response: {}", e)))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
