//! 解析中インジケータ

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="progress-container" role="status">
            <div class="progress-bar indeterminate">
                <div class="progress-fill" />
            </div>
            <p class="progress-text">"Analyzing image..."</p>
        </div>
    }
}
