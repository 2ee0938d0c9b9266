//! アップロード候補のスキャン
//!
//! 指定されたファイル/フォルダを走査し、受付ポリシーでの判定結果を返す。
//! ファイルの送信・保存は行わない。

use crate::error::{HealthReportsError, Result};
use health_reports_common::{UploadCandidate, UploadPolicy, UploadRejection};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub candidate: UploadCandidate,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub file: ScannedFile,
    pub verdict: std::result::Result<(), UploadRejection>,
}

impl CheckResult {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

pub fn scan_paths(paths: &[PathBuf], recursive: bool) -> Result<Vec<ScannedFile>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(HealthReportsError::PathNotFound(path.display().to_string()));
        }

        if path.is_file() {
            files.push(scanned_file(path)?);
            continue;
        }

        let walker = if recursive {
            WalkDir::new(path)
        } else {
            WalkDir::new(path).max_depth(1) // 直下のみ
        };

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                files.push(scanned_file(entry.path())?);
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn scanned_file(path: &Path) -> Result<ScannedFile> {
    let size = std::fs::metadata(path)?.len();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ScannedFile {
        path: path.to_path_buf(),
        candidate: UploadCandidate::new(file_name, String::new(), size),
    })
}

pub fn check_files(files: Vec<ScannedFile>, policy: &UploadPolicy) -> Vec<CheckResult> {
    files
        .into_iter()
        .map(|file| {
            let verdict = policy.screen(&file.candidate);
            CheckResult { file, verdict }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_single_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("cbc.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();

        let files = scan_paths(&[path.clone()], false).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].candidate.file_name, "cbc.pdf");
        assert_eq!(files[0].candidate.size, 8);
    }

    #[test]
    fn test_scan_folder_not_recursive_by_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.png"), b"png").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.jpg"), b"jpg").unwrap();

        let flat = scan_paths(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(flat.len(), 1);

        let deep = scan_paths(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_scan_missing_path() {
        let result = scan_paths(&[PathBuf::from("/nonexistent/uploads")], false);
        assert!(matches!(result, Err(HealthReportsError::PathNotFound(_))));
    }

    #[test]
    fn test_check_files_verdicts() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("scan.png"), vec![0u8; 32]).unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        fs::write(dir.path().join("huge.pdf"), vec![0u8; 64]).unwrap();

        let files = scan_paths(&[dir.path().to_path_buf()], false).unwrap();
        let results = check_files(files, &UploadPolicy::with_max_bytes(40));

        let verdict = |name: &str| {
            results
                .iter()
                .find(|r| r.file.candidate.file_name == name)
                .map(|r| r.verdict.clone())
                .expect("結果がない")
        };
        assert_eq!(verdict("scan.png"), Ok(()));
        assert!(matches!(verdict("notes.txt"), Err(UploadRejection::UnsupportedType(_))));
        assert!(matches!(verdict("huge.pdf"), Err(UploadRejection::TooLarge { size: 64, limit: 40 })));
    }
}
