use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthReportsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ホームディレクトリが見つかりません")]
    MissingHome,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("パスが見つかりません: {0}")]
    PathNotFound(String),

    #[error("レポートに{0}件の問題があります")]
    ValidationFailed(usize),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] health_reports_common::Error),
}

pub type Result<T> = std::result::Result<T, HealthReportsError>;
