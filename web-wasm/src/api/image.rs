//! ブラウザで選択された画像ファイル

use gloo::file::{File, ObjectUrl};
use accident_common::{to_data_url, Error, ImageSource, PreviewHandle, Result};

/// ファイル選択ダイアログで選ばれた画像
#[derive(Debug, Clone)]
pub struct BrowserImage {
    file: File,
}

impl BrowserImage {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl ImageSource for BrowserImage {
    fn name(&self) -> String {
        self.file.name()
    }

    async fn encode(&self) -> Result<String> {
        let bytes = gloo::file::futures::read_as_bytes(&self.file)
            .await
            .map_err(|e| Error::Encoding(e.to_string()))?;
        to_data_url(&self.file.raw_mime_type(), &bytes)
    }
}

/// プレビュー用のObject URL（破棄時にrevokeされる）
pub struct ObjectUrlPreview(ObjectUrl);

impl ObjectUrlPreview {
    pub fn new(file: &File) -> Self {
        Self(ObjectUrl::from(file.clone()))
    }
}

impl PreviewHandle for ObjectUrlPreview {
    fn url(&self) -> String {
        (*self.0).to_owned()
    }
}
