//! レポートの読み込み元
//!
//! 優先順位: --input > 環境変数 > 設定ファイル > サンプルデータ

use crate::error::{HealthReportsError, Result};
use health_reports_common::{parse_reports, sample_reports, Report};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Sample,
}

impl ReportSource {
    /// `configured` は `Config::reports_file()` の結果（環境変数反映済み）
    pub fn resolve(input: Option<PathBuf>, configured: Option<PathBuf>) -> Self {
        match input.or(configured) {
            Some(path) => ReportSource::File(path),
            None => ReportSource::Sample,
        }
    }

    pub fn load(&self) -> Result<Vec<Report>> {
        match self {
            ReportSource::Sample => Ok(sample_reports()),
            ReportSource::File(path) => {
                if !path.exists() {
                    return Err(HealthReportsError::FileNotFound(path.display().to_string()));
                }
                let content = std::fs::read_to_string(path)?;
                let reports = parse_reports(&content)?;
                tracing::debug!(path = %path.display(), count = reports.len(), "reports loaded");
                Ok(reports)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ReportSource::File(path) => path.display().to_string(),
            ReportSource::Sample => "サンプルデータ".to_string(),
        }
    }
}
