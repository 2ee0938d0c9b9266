//! Health Reports Common Library
//!
//! CLIとWeb(WASM)で共有される型と表示ルール

pub mod types;
pub mod seed;
pub mod date;
pub mod presentation;
pub mod drag;
pub mod upload;
pub mod validate;
pub mod error;

pub use types::{Report, ReportStatus};
pub use seed::sample_reports;
pub use date::{format_report_date, parse_report_date};
pub use presentation::{build_cards, build_cards_with_step, Findings, ReportCard, StatusBadge};
pub use drag::{DragEventKind, DragIndicator};
pub use upload::{UploadCandidate, UploadPolicy, UploadRejection};
pub use validate::{find_problems, parse_reports};
pub use error::{Error, Result};
