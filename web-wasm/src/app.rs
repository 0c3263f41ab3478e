//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use crate::components::{
    analyze_view::AnalyzeView,
    header::Header,
    pages::{Dashboard, NotFound, SettingsPage},
    sidebar::Sidebar,
};
use crate::config::load_client_config;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_client_config());

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// ヘッダー・サイドバー・コンテンツ領域
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! {
        <div class="container">
            <Header />
            <div class="app-body">
                <Sidebar current_path=current_path />
                <main class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/analyze") view=AnalyzeView />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
