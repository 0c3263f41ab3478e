//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Accident Detection - Admin Dashboard"</h1>
        </header>
    }
}
