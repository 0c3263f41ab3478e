//! ローカル画像ファイル

use crate::error::{DetectError, Result};
use accident_common::{to_data_url, Error, ImageSource};
use image::ImageFormat;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageFile {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DetectError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }
}

/// 内容から画像形式を判定し、だめなら拡張子で判定
pub fn detect_mime(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .ok()
        .map(|format| format.to_mime_type())
}

impl ImageSource for ImageFile {
    fn name(&self) -> String {
        self.file_name.clone()
    }

    async fn encode(&self) -> accident_common::Result<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Encoding(format!("{}: {}", self.path.display(), e)))?;

        let mime = detect_mime(&self.path, &bytes)
            .ok_or_else(|| Error::NotAnImage(self.file_name.clone()))?;

        to_data_url(mime, &bytes)
    }
}
