//! ターミナル表示
//!
//! Web版のカードと同じ分岐（バッジ・要約・所見）をテキストで出す。

use health_reports_common::presentation::{
    ABNORMAL_HEADING, CARD_ACTIONS, NORMAL_MESSAGE, SUMMARY_HEADING,
};
use health_reports_common::{Findings, ReportCard};
use std::fmt::Write;

const INDENT: &str = "    ";

pub fn render_card(card: &ReportCard) -> String {
    let mut out = String::new();

    let _ = write!(out, "[{}] {}", card.id, card.title);
    if let Some(badge) = card.badge {
        let _ = write!(out, "  ✔ {}", badge.label);
    }
    out.push('\n');
    let _ = writeln!(out, "{}{} • {}", INDENT, card.report_type, card.display_date);

    if let Some(summary) = &card.summary {
        let _ = writeln!(out, "{}{} {}", INDENT, SUMMARY_HEADING, summary);
    }

    match &card.findings {
        Findings::Abnormal(markers) => {
            let _ = writeln!(out, "{}⚠ {}", INDENT, ABNORMAL_HEADING);
            for marker in markers {
                let _ = writeln!(out, "{}  - {}", INDENT, marker);
            }
        }
        Findings::Normal => {
            let _ = writeln!(out, "{}✔ {}", INDENT, NORMAL_MESSAGE);
        }
    }

    let _ = writeln!(out, "{}[{}]", INDENT, CARD_ACTIONS.join("] ["));
    out
}

/// カード一覧（空行区切り）
pub fn render_list(cards: &[ReportCard]) -> String {
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
