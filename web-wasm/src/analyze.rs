//! 解析画面のリアクティブな状態
//!
//! `AnalyzeState` をシグナルに載せ、選択ファイルとプレビューをオーナーに紐付けて保持する。
//! オーナー破棄時に実行中のリクエストを無効化し、プレビューを一度だけ解放する。

use leptos::prelude::*;
use gloo::file::File;
use accident_common::{
    check_image_mime, AnalysisResult, AnalyzeState, Applied, Error, PreviewHandle, PreviewSlot,
    RequestTicket,
};

pub struct AnalyzeController<H: PreviewHandle + 'static> {
    state: RwSignal<AnalyzeState>,
    selected: StoredValue<Option<File>, LocalStorage>,
    preview: StoredValue<PreviewSlot<H>, LocalStorage>,
    preview_url: RwSignal<Option<String>>,
    file_name: RwSignal<Option<String>>,
    make_preview: fn(&File) -> H,
}

impl<H: PreviewHandle + 'static> Clone for AnalyzeController<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: PreviewHandle + 'static> Copy for AnalyzeController<H> {}

impl<H: PreviewHandle + 'static> AnalyzeController<H> {
    /// 現在のオーナー配下に作成する
    pub fn new(make_preview: fn(&File) -> H) -> Self {
        let controller = Self {
            state: RwSignal::new(AnalyzeState::new()),
            selected: StoredValue::new_local(None),
            preview: StoredValue::new_local(PreviewSlot::new()),
            preview_url: RwSignal::new(None),
            file_name: RwSignal::new(None),
            make_preview,
        };

        on_cleanup(move || {
            let _ = controller.state.try_update_untracked(AnalyzeState::tear_down);
            let _ = controller.preview.try_update_value(PreviewSlot::clear);
        });

        controller
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AnalyzeState::loading))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.state.with(|s| s.result().cloned())
    }

    pub fn preview_url(&self) -> Signal<Option<String>> {
        self.preview_url.into()
    }

    pub fn file_name(&self) -> Signal<Option<String>> {
        self.file_name.into()
    }

    /// ファイル選択
    ///
    /// 画像以外は拒否し、既存のプレビューも解放する。
    pub fn select(&self, file: File) {
        if let Err(err) = check_image_mime(&file.raw_mime_type()) {
            log::warn!("rejected {}: {}", file.name(), err);
            self.selected.set_value(None);
            self.preview.update_value(PreviewSlot::clear);
            self.preview_url.set(None);
            self.file_name.set(None);
            self.state.update(|s| s.reject_file(&err));
            return;
        }

        let make_preview = self.make_preview;
        let url = self.preview.try_update_value(|slot| slot.replace(make_preview(&file)));
        self.preview_url.set(url);
        self.file_name.set(Some(file.name()));
        self.selected.set_value(Some(file));
        self.state.update(AnalyzeState::select_file);
    }

    /// 送信開始
    ///
    /// 未選択なら検証エラーを設定して `None` を返す。
    pub fn begin_submit(&self) -> Option<(RequestTicket, File)> {
        let ticket = self.state.try_update(AnalyzeState::begin_submit)?.ok()?;
        let file = self.selected.try_with_value(Option::clone).flatten()?;
        Some((ticket, file))
    }

    /// 送信完了を反映
    ///
    /// オーナー破棄後は `None`。
    pub fn apply(
        &self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, Error>,
    ) -> Option<Applied> {
        let applied = self.state.try_update(|s| s.complete(ticket, outcome));
        match applied {
            Some(Applied::Yes) => {}
            Some(other) => log::debug!("analysis #{} not applied: {:?}", ticket.id(), other),
            None => log::debug!("analysis #{} finished after view was disposed", ticket.id()),
        }
        applied
    }
}
