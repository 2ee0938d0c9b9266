//! 検査レポートの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Report: 1件の検査結果とAI要約（表示専用）
//! - ReportStatus: 解析ステータス

use serde::{Deserialize, Serialize};

/// 解析ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Analyzed,
    Processing,
    Pending,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Analyzed => "analyzed",
            ReportStatus::Processing => "processing",
            ReportStatus::Pending => "pending",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検査レポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,

    pub name: String,

    #[serde(rename = "type")]
    pub report_type: String,      // 検査区分

    /// YYYY-MM-DD
    pub date: String,

    pub status: ReportStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abnormal_markers: Option<Vec<String>>,
}

impl Report {
    /// 異常マーカーが1件以上あるか（None と空配列は同じ扱い）
    pub fn has_abnormal_markers(&self) -> bool {
        self.abnormal_markers
            .as_ref()
            .is_some_and(|markers| !markers.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            id: 7,
            name: "Lipid Panel".to_string(),
            report_type: "Blood Test".to_string(),
            date: "2026-03-01".to_string(),
            status: ReportStatus::Processing,
            ai_summary: None,
            abnormal_markers: None,
        }
    }

    #[test]
    fn test_status_serialize_lowercase() {
        let json = serde_json::to_string(&ReportStatus::Pending).expect("シリアライズ失敗");
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result = serde_json::from_str::<ReportStatus>("\"failed\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serialize_uses_type_key() {
        let json = serde_json::to_string(&sample()).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"Blood Test\""));
        assert!(json.contains("\"status\":\"processing\""));
        // None のフィールドは出力しない
        assert!(!json.contains("aiSummary"));
        assert!(!json.contains("abnormalMarkers"));
    }

    #[test]
    fn test_report_deserialize_camel_case() {
        let json = r#"{
            "id": 4,
            "name": "Liver Function",
            "type": "Blood Test",
            "date": "2026-02-01",
            "status": "analyzed",
            "aiSummary": "ALT slightly elevated.",
            "abnormalMarkers": ["ALT 62 U/L", "AST 48 U/L"]
        }"#;

        let report: Report = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(report.id, 4);
        assert_eq!(report.report_type, "Blood Test");
        assert_eq!(report.ai_summary.as_deref(), Some("ALT slightly elevated."));
        assert_eq!(
            report.abnormal_markers,
            Some(vec!["ALT 62 U/L".to_string(), "AST 48 U/L".to_string()])
        );
        assert!(report.has_abnormal_markers());
        assert_eq!(report.status, ReportStatus::Analyzed);
    }

    #[test]
    fn test_report_deserialize_missing_optionals() {
        let json = r#"{"id": 1, "name": "X", "type": "Y", "date": "2026-01-01", "status": "pending"}"#;

        let report: Report = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(report.ai_summary, None);
        assert_eq!(report.abnormal_markers, None);
    }

    #[test]
    fn test_empty_markers_are_not_abnormal() {
        let mut report = sample();
        assert!(!report.has_abnormal_markers());

        report.abnormal_markers = Some(Vec::new());
        assert!(!report.has_abnormal_markers());
    }
}
