//! AI解析の案内バナー

use leptos::prelude::*;

#[component]
pub fn AnalysisBanner() -> impl IntoView {
    view! {
        <div class="analysis-banner">
            <div class="banner-icon">"🧠"</div>
            <div>
                <h3>"AI-Powered Analysis"</h3>
                <p class="text-muted">
                    "Our advanced AI automatically analyzes your reports, identifies abnormal markers, "
                    "and provides easy-to-understand summaries within minutes."
                </p>
            </div>
        </div>
    }
}
