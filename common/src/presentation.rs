//! カード表示モデル
//!
//! レポート1件をカード1枚に変換する。描画時の分岐はすべてここで決め、
//! Leptos のビューと CLI の両方がこのモデルから描画する。

use serde::Serialize;
use std::time::Duration;

use crate::date::format_report_date;
use crate::types::{Report, ReportStatus};

/// 入場アニメーションの1枚あたりの遅延
pub const DEFAULT_STAGGER_STEP: Duration = Duration::from_millis(100);

pub const SUMMARY_HEADING: &str = "AI Summary:";
pub const ABNORMAL_HEADING: &str = "Abnormal Markers Detected";
pub const NORMAL_MESSAGE: &str = "All markers within normal range";

/// カード下部のボタン（ハンドラなし）
pub const CARD_ACTIONS: [&str; 3] = ["View Report", "Download", "AI Insights"];

/// ステータスバッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl StatusBadge {
    /// analyzed 以外はバッジなし
    pub fn for_status(status: ReportStatus) -> Option<Self> {
        match status {
            ReportStatus::Analyzed => Some(StatusBadge {
                label: "Analyzed",
                class: "analyzed",
            }),
            ReportStatus::Processing | ReportStatus::Pending => None,
        }
    }
}

/// 所見ブロック
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "markers", rename_all = "lowercase")]
pub enum Findings {
    /// 異常マーカーあり（元の順序を保持）
    Abnormal(Vec<String>),
    /// 異常なし（要約の有無に関係なく表示）
    Normal,
}

impl Findings {
    pub fn for_report(report: &Report) -> Self {
        match &report.abnormal_markers {
            Some(markers) if report.has_abnormal_markers() => Findings::Abnormal(markers.clone()),
            _ => Findings::Normal,
        }
    }
}

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub id: i64,
    pub title: String,
    pub report_type: String,
    pub display_date: String,
    pub badge: Option<StatusBadge>,
    pub summary: Option<String>,
    pub findings: Findings,
    pub stagger_ms: u64,
}

impl ReportCard {
    pub fn from_report(report: &Report, index: usize) -> Self {
        Self::with_step(report, index, DEFAULT_STAGGER_STEP)
    }

    pub fn with_step(report: &Report, index: usize, step: Duration) -> Self {
        let stagger = stagger_delay(index, step);
        ReportCard {
            id: report.id,
            title: report.name.clone(),
            report_type: report.report_type.clone(),
            display_date: format_report_date(&report.date),
            badge: StatusBadge::for_status(report.status),
            summary: report.ai_summary.clone(),
            findings: Findings::for_report(report),
            stagger_ms: u64::try_from(stagger.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    /// CSS の animation-delay 値（例: "0.2s"）
    pub fn animation_delay_css(&self) -> String {
        format!("{}s", self.stagger().as_secs_f64())
    }
}

/// 入場アニメーションの遅延 = index × step
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(index)
}

/// レポート一覧をカード一覧に変換（順序はそのまま）
pub fn build_cards(reports: &[Report]) -> Vec<ReportCard> {
    build_cards_with_step(reports, DEFAULT_STAGGER_STEP)
}

pub fn build_cards_with_step(reports: &[Report], step: Duration) -> Vec<ReportCard> {
    reports
        .iter()
        .enumerate()
        .map(|(index, report)| ReportCard::with_step(report, index, step))
        .collect()
}
