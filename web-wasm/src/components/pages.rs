//! 静的ページ（ダッシュボード・設定・Not Found）

use leptos::prelude::*;
use leptos_router::components::A;
use accident_common::ClientConfig;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <section class="dashboard">
            <h2>"Dashboard"</h2>
            <p>"Upload a scene photo to check it for traffic accidents."</p>
            <A href="/analyze">"Go to Analyze →"</A>
        </section>
    }
}

/// 設定ページ（読み取り専用）
#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();

    view! {
        <section class="settings-panel">
            <h2>"Settings"</h2>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-base">"Analysis API"</label>
                    <input
                        type="text"
                        id="api-base"
                        readonly=true
                        prop:value=config.api_base_url.clone()
                    />
                </div>
                <div class="form-group">
                    <label for="analyze-url">"Analyze endpoint"</label>
                    <input
                        type="text"
                        id="analyze-url"
                        readonly=true
                        prop:value=config.analyze_url()
                    />
                </div>
            </div>
            <p class="text-muted">
                "Set "<code>"<meta name=\"analysis-api-base\">"</code>" in index.html to change the endpoint."
            </p>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <A href="/">"Back to Dashboard"</A>
        </section>
    }
}
