//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h2>"Test Reports"</h2>
            <p class="text-muted">"Upload and manage your medical test reports"</p>
        </header>
    }
}
