//! レポート一覧コンポーネント

use leptos::prelude::*;
use health_reports_common::presentation::{
    ABNORMAL_HEADING, CARD_ACTIONS, NORMAL_MESSAGE, SUMMARY_HEADING,
};
use health_reports_common::{build_cards, Findings, Report, ReportCard};
use crate::components::{analysis_banner::AnalysisBanner, upload_area::UploadArea};

/// ドロップエリア・案内バナー・レポートカードを並べる画面本体
///
/// `reports` は初期化時に受け取ったまま変更しない。
#[component]
pub fn ReportListView(reports: Vec<Report>) -> impl IntoView {
    let (drag_active, set_drag_active) = signal(false);
    let cards = build_cards(&reports);

    view! {
        <div class="report-list-view">
            <UploadArea drag_active=drag_active set_drag_active=set_drag_active />
            <AnalysisBanner />
            <div class="report-list">
                <For
                    each=move || cards.clone()
                    key=|card| card.id
                    children=move |card| view! { <ReportCardView card=card /> }
                />
            </div>
        </div>
    }
}

#[component]
fn ReportCardView(card: ReportCard) -> impl IntoView {
    let style = card_style(&card);

    let findings = match card.findings {
        Findings::Abnormal(markers) => view! {
            <div class="findings abnormal">
                <span class="findings-icon">"⚠"</span>
                <div>
                    <p class="findings-heading">{ABNORMAL_HEADING}</p>
                    <ul>
                        {markers.into_iter().map(|marker| view! { <li>{marker}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        }
        .into_any(),
        Findings::Normal => view! {
            <div class="findings normal">
                <span class="findings-icon">"✔"</span>
                <p>{NORMAL_MESSAGE}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="report-card" style=style>
            <div class="report-card-head">
                <div class="report-title">
                    <div class="report-icon">"📄"</div>
                    <div>
                        <h3>{card.title}</h3>
                        <div class="report-meta text-muted">
                            <span>{card.report_type}</span>
                            <span>"•"</span>
                            <span>{card.display_date}</span>
                        </div>
                    </div>
                </div>
                {card.badge.map(|badge| view! {
                    <span class=format!("status-badge {}", badge.class)>"✔ "{badge.label}</span>
                })}
            </div>

            {card.summary.map(|summary| view! {
                <div class="ai-summary">
                    <p class="ai-summary-heading">{SUMMARY_HEADING}</p>
                    <p class="text-muted">{summary}</p>
                </div>
            })}

            {findings}

            <div class="report-actions">
                {CARD_ACTIONS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let class = if i == 0 { "btn btn-primary" } else { "btn btn-secondary" };
                        view! { <button class=class>{*label}</button> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// 入場アニメーション（index × 100ms ずつ遅らせる）
fn card_style(card: &ReportCard) -> String {
    format!("animation-delay: {}", card.animation_delay_css())
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use health_reports_common::ReportStatus;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_point() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element.dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn wasm_card_with_markers_and_no_summary() {
        let report = Report {
            id: 21,
            name: "Lipid Panel".to_string(),
            report_type: "Blood Test".to_string(),
            date: "2026-02-20".to_string(),
            status: ReportStatus::Pending,
            ai_summary: None,
            abnormal_markers: Some(vec!["LDL 172 mg/dL".to_string(), "HDL 35 mg/dL".to_string()]),
        };
        let card = ReportCard::from_report(&report, 0);

        let parent = mount_point();
        let _handle = leptos::mount::mount_to(parent.clone(), move || view! { <ReportCardView card=card /> });
        let html = parent.inner_html();

        assert!(html.contains("Lipid Panel"));
        assert!(html.contains("Feb 20, 2026"));
        assert!(html.contains(ABNORMAL_HEADING));
        assert!(!html.contains(NORMAL_MESSAGE));
        assert!(!html.contains(SUMMARY_HEADING));
        assert!(!html.contains("status-badge"));

        let items = parent.query_selector_all("li").unwrap();
        assert_eq!(items.length(), 2);
        assert_eq!(items.get(0).and_then(|n| n.text_content()).as_deref(), Some("LDL 172 mg/dL"));
        assert_eq!(items.get(1).and_then(|n| n.text_content()).as_deref(), Some("HDL 35 mg/dL"));
    }

    #[wasm_bindgen_test]
    fn wasm_analyzed_card_shows_badge_summary_and_normal_block() {
        let card = build_cards(&health_reports_common::sample_reports()).remove(0);

        let parent = mount_point();
        let _handle = leptos::mount::mount_to(parent.clone(), move || view! { <ReportCardView card=card /> });
        let html = parent.inner_html();

        assert!(html.contains("status-badge analyzed"));
        assert!(html.contains("All values within normal range. No concerning markers detected."));
        assert!(html.contains(NORMAL_MESSAGE));
        assert!(!html.contains(ABNORMAL_HEADING));
        assert_eq!(parent.query_selector_all("li").unwrap().length(), 0);
    }
}
