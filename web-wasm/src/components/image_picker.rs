//! 画像選択エリアコンポーネント
//!
//! image/* のみ、1ファイルのみ。ドラッグ&ドロップは扱わない。

use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlInputElement;
use gloo::file::File;

#[component]
pub fn ImagePicker<F>(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] file_name: Signal<Option<String>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let input_ref = NodeRef::<html::Input>::new();

    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = {
        let on_select = on_select.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            on_select(File::from(file));
            // 同じファイルを再選択できるようにリセット
            input.set_value("");
        }
    };

    view! {
        <div
            class="upload-area"
            class:disabled=move || disabled.get()
            on:click=on_click
        >
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                style="display:none"
                on:change=on_change
            />
            <div class="upload-icon">"📷"</div>
            {move || match file_name.get() {
                Some(name) => view! { <p class="file-name">{name}</p> }.into_any(),
                None => view! { <p>"Click to choose an image"</p> }.into_any(),
            }}
            <p class="text-muted">"Supported: JPEG, PNG, WebP"</p>
        </div>
    }
}
