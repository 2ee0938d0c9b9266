//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate report id: {0}")]
    DuplicateId(i64),

    #[error("Invalid date for report {id}: {value}")]
    InvalidDate { id: i64, value: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_duplicate_id() {
        let error = Error::DuplicateId(3);
        assert_eq!(format!("{}", error), "Duplicate report id: 3");
    }

    #[test]
    fn test_error_display_invalid_date() {
        let error = Error::InvalidDate { id: 2, value: "2026-13-40".to_string() };
        assert_eq!(format!("{}", error), "Invalid date for report 2: 2026-13-40");
    }

    #[test]
    fn test_every_variant_describes_report_data() {
        let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let errors = vec![
            Error::Json(json_error),
            Error::DuplicateId(1),
            Error::InvalidDate { id: 1, value: "x".to_string() },
        ];

        for error in errors {
            let described = match &error {
                Error::Json(_) => "JSON error",
                Error::DuplicateId(_) => "Duplicate report id",
                Error::InvalidDate { .. } => "Invalid date",
            };
            assert!(format!("{}", error).starts_with(described));
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
