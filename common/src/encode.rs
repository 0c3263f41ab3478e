//! Data URLエンコード
//!
//! 画像バイト列を転送用の自己完結したテキスト（base64 Data URI）に変換する。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::error::{Error, Result};

/// MIMEタイプが不明な場合のデフォルト
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// バイト列からData URLを生成
///
/// 空のMIMEタイプは `image/jpeg` として扱う。
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::Encoding("empty file".to_string()));
    }
    let mime = if mime_type.trim().is_empty() { DEFAULT_IMAGE_MIME } else { mime_type.trim() };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// 画像として受け付けるMIMEタイプか
///
/// 空文字（ブラウザが判定できなかった場合）は受け付ける。
fn is_acceptable_image_mime(mime_type: &str) -> bool {
    let mime = mime_type.trim();
    mime.is_empty() || mime.to_ascii_lowercase().starts_with("image/")
}

/// 選択されたファイルのMIMEタイプを検証
pub fn check_image_mime(mime_type: &str) -> Result<()> {
    if is_acceptable_image_mime(mime_type) {
        Ok(())
    } else {
        Err(Error::NotAnImage(mime_type.to_string()))
    }
}
