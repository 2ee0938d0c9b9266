//! 外部から渡されたレポート一覧の検査

use std::collections::HashSet;

use crate::date::parse_report_date;
use crate::error::Error;
use crate::types::Report;

/// 問題をすべて列挙（空なら表示可能）
pub fn find_problems(reports: &[Report]) -> Vec<Error> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for report in reports {
        if !seen.insert(report.id) {
            problems.push(Error::DuplicateId(report.id));
        }
        if parse_report_date(&report.date).is_none() {
            problems.push(Error::InvalidDate {
                id: report.id,
                value: report.date.clone(),
            });
        }
    }

    problems
}

/// JSON配列からレポート一覧を読み込む
pub fn parse_reports(json: &str) -> crate::Result<Vec<Report>> {
    Ok(serde_json::from_str(json)?)
}
