//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    report_list::ReportListView,
};
use health_reports_common::sample_reports;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 初期化時に一度だけ読み込む（以後変更しない）
    let reports = sample_reports();

    view! {
        <div class="container">
            <Header />
            <ReportListView reports=reports />
        </div>
    }
}
