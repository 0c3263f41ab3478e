//! プレビューURLの保持
//!
//! ハンドルは破棄時に解放される型（ブラウザでは `gloo::file::ObjectUrl`）を想定する。
//! スロットは常に高々1つのハンドルを持ち、差し替え時か破棄時のどちらか一度だけ解放する。

/// プレビューハンドル
pub trait PreviewHandle {
    /// 画像要素に設定するURL
    fn url(&self) -> String;
}

/// 現在のプレビューを保持するスロット
#[derive(Debug)]
pub struct PreviewSlot<H: PreviewHandle> {
    current: Option<H>,
}

impl<H: PreviewHandle> Default for PreviewSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: PreviewHandle> PreviewSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいハンドルに差し替え（旧ハンドルはここで解放される）
    pub fn replace(&mut self, handle: H) -> String {
        let url = handle.url();
        drop(self.current.replace(handle));
        url
    }

    /// 現在のハンドルを解放
    pub fn clear(&mut self) {
        drop(self.current.take());
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
