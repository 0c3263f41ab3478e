//! ナビゲーションサイドバー
//!
//! 現在のパスは呼び出し側（ルーター）から受け取り、内部状態は持たない。

use leptos::prelude::*;
use leptos_router::components::A;
use accident_common::{active_index, NAV_ITEMS};

#[component]
pub fn Sidebar(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    let active = Memo::new(move |_| current_path.with(|path| active_index(NAV_ITEMS, path)));

    view! {
        <nav class="sidebar">
            <ul class="nav-list">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(i, item)| view! {
                        <li class="nav-item" class:active=move || active.get() == Some(i)>
                            <A href=item.path>{item.label}</A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
