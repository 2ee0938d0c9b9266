//! サンプルレポート
//!
//! 画面初期化時に一度だけ読み込まれる固定データ

use crate::types::{Report, ReportStatus};

/// 画面に表示するサンプルレポート3件
pub fn sample_reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            name: "Complete Blood Count (CBC)".to_string(),
            report_type: "Blood Test".to_string(),
            date: "2026-02-20".to_string(),
            status: ReportStatus::Analyzed,
            ai_summary: Some("All values within normal range. No concerning markers detected.".to_string()),
            abnormal_markers: Some(Vec::new()),
        },
        Report {
            id: 2,
            name: "Tumor Marker Analysis".to_string(),
            report_type: "Cancer Screening".to_string(),
            date: "2026-02-15".to_string(),
            status: ReportStatus::Analyzed,
            ai_summary: Some("CEA and CA 19-9 levels normal. No indication of malignancy.".to_string()),
            abnormal_markers: Some(Vec::new()),
        },
        Report {
            id: 3,
            name: "Chest X-Ray".to_string(),
            report_type: "Imaging".to_string(),
            date: "2026-02-10".to_string(),
            status: ReportStatus::Analyzed,
            ai_summary: Some("Clear lung fields. No masses or abnormalities detected.".to_string()),
            abnormal_markers: Some(Vec::new()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_reports_count() {
        assert_eq!(sample_reports().len(), 3);
    }

    #[test]
    fn test_sample_report_ids_unique() {
        let reports = sample_reports();
        let ids: HashSet<i64> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), reports.len());
    }

    #[test]
    fn test_sample_reports_all_analyzed_without_markers() {
        for report in sample_reports() {
            assert_eq!(report.status, ReportStatus::Analyzed, "{} が analyzed ではない", report.name);
            assert!(!report.has_abnormal_markers());
            assert!(report.ai_summary.is_some());
        }
    }
}
