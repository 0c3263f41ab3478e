//! 画像解析ビュー
//!
//! 画像を1枚選び、プレビューし、解析APIに送信して結果を表示する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::file::File;
use accident_common::{analyze_image, ClientConfig};
use crate::analyze::AnalyzeController;
use crate::api::{BrowserImage, HttpAnalysisApi, ObjectUrlPreview};
use crate::components::{
    image_picker::ImagePicker,
    loading_indicator::LoadingIndicator,
    result_summary::ResultSummary,
};

#[component]
pub fn AnalyzeView() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = StoredValue::new(HttpAnalysisApi::new(&config));

    // 画面破棄時に実行中のリクエストを無効化し、プレビューを解放する
    let controller = AnalyzeController::new(ObjectUrlPreview::new);
    let loading = controller.loading();
    let preview_url = controller.preview_url();
    let file_name = controller.file_name();

    let on_select = move |file: File| controller.select(file);

    let on_submit = move |_| {
        // 未選択なら検証エラーが表示される
        let Some((ticket, file)) = controller.begin_submit() else {
            return;
        };
        let api = api.get_value();

        spawn_local(async move {
            let image = BrowserImage::new(file);
            let outcome = analyze_image(&image, &api).await;
            controller.apply(ticket, outcome);
        });
    };

    view! {
        <section class="analyze-view">
            <h2>"Analyze Image"</h2>

            <ImagePicker disabled=loading file_name=file_name on_select=on_select />

            {move || preview_url.get().map(|url| view! {
                <div class="preview">
                    <img src=url alt="Selected image preview" />
                </div>
            })}

            <div class="actions">
                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=on_submit
                >
                    {move || if loading.get() { "Analyzing..." } else { "Analyze" }}
                </button>

                {move || controller
                    .error()
                    .map(|message| view! {
                        <div class="alert alert-error" role="alert">{message}</div>
                    })}
            </div>

            <Show when=move || loading.get()>
                <LoadingIndicator />
            </Show>

            {move || controller
                .result()
                .map(|result| view! { <ResultSummary result=result /> })}
        </section>
    }
}
