//! アップロード前チェック
//!
//! 受付可能な形式とサイズの判定のみ。ファイルの保存・送信は行わない。

use std::path::Path;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";

/// 10MB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// 画面に表示する受付条件
pub const SUPPORTED_FORMATS_NOTE: &str = "Supported formats: PDF, JPG, PNG (Max 10MB)";

/// チェック対象のファイル情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    /// 空文字は「不明」扱い（拡張子から推定）
    pub mime_type: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// MIMEタイプ（未指定なら拡張子から推定）
    pub fn effective_mime(&self) -> Option<&str> {
        if self.mime_type.is_empty() {
            mime_from_file_name(&self.file_name)
        } else {
            Some(self.mime_type.as_str())
        }
    }
}

/// 却下理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    UnsupportedType(String),
    TooLarge { size: u64, limit: u64 },
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadRejection::UnsupportedType(mime) if mime.is_empty() => {
                write!(f, "Invalid file type")
            }
            UploadRejection::UnsupportedType(mime) => write!(f, "Invalid file type: {}", mime),
            UploadRejection::TooLarge { size, limit } => {
                write!(f, "File too large: {} bytes (limit {} bytes)", size, limit)
            }
        }
    }
}

/// 受付ポリシー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub allowed_types: Vec<String>,
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_types: vec![MIME_PDF.to_string(), MIME_JPEG.to_string(), MIME_PNG.to_string()],
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }

    /// 形式 → サイズの順に判定
    pub fn screen(&self, candidate: &UploadCandidate) -> Result<(), UploadRejection> {
        let mime = candidate.effective_mime().unwrap_or_default();
        if !self.allowed_types.iter().any(|t| t == mime) {
            return Err(UploadRejection::UnsupportedType(mime.to_string()));
        }

        if candidate.size > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size: candidate.size,
                limit: self.max_bytes,
            });
        }

        Ok(())
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_from_file_name(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(MIME_PDF),
        "jpg" | "jpeg" => Some(MIME_JPEG),
        "png" => Some(MIME_PNG),
        _ => None,
    }
}

/// 保存用ファイル名（空白をアンダースコアに置換）
pub fn safe_file_name(file_name: &str) -> String {
    file_name.replace(' ', "_")
}
