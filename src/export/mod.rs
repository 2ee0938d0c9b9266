//! カード表示モデルのJSON出力

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use health_reports_common::ReportCard;
use serde::Serialize;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = "report-cards.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardExport<'a> {
    pub generated_at: String,
    pub source: String,
    pub cards: &'a [ReportCard],
}

/// ディレクトリ指定なら既定のファイル名を付ける
///
/// 存在しない拡張子なしのパスはディレクトリとして扱う。
/// 既存ファイルは拡張子がなくてもそのまま上書きする。
pub fn output_path(output: &Path) -> PathBuf {
    if output.is_dir() || (!output.exists() && output.extension().is_none()) {
        output.join(DEFAULT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

pub fn to_json(cards: &[ReportCard], source: &str) -> Result<String> {
    let export = CardExport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        source: source.to_string(),
        cards,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn export_cards(cards: &[ReportCard], source: &str, output: &Path) -> Result<PathBuf> {
    let path = output_path(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&path, to_json(cards, source)?)?;
    tracing::info!(path = %path.display(), count = cards.len(), "cards exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_reports_common::{build_cards, sample_reports};

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert_eq!(output_path(dir.path()), dir.path().join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_output_path_keeps_file_name() {
        let path = Path::new("out/cards.json");
        assert_eq!(output_path(path), PathBuf::from("out/cards.json"));
    }

    #[test]
    fn test_output_path_existing_file_without_extension() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("Makefile");
        std::fs::write(&path, "all:").unwrap();

        assert_eq!(output_path(&path), path);

        let cards = build_cards(&sample_reports());
        let written = export_cards(&cards, "sample", &path).unwrap();
        assert_eq!(written, path);
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"cards\""));
    }

    #[test]
    fn test_output_path_missing_without_extension_is_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("out");
        assert_eq!(output_path(&target), target.join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_to_json_contains_cards() {
        let cards = build_cards(&sample_reports());
        let json = to_json(&cards, "sample").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "sample");
        assert_eq!(value["cards"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(value["cards"][0]["displayDate"], "Feb 20, 2026");
        assert_eq!(value["cards"][0]["findings"]["kind"], "normal");
        assert!(value["generatedAt"].as_str().is_some_and(|s| s.ends_with('Z')));
    }
}
