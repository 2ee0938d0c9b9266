use crate::error::{HealthReportsError, Result};
use health_reports_common::upload::DEFAULT_MAX_UPLOAD_BYTES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// レポートファイルを指定する環境変数（設定ファイルより優先）
pub const REPORTS_FILE_ENV: &str = "HEALTH_REPORTS_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reports_file: Option<PathBuf>,
    pub stagger_step_ms: u64,
    pub max_upload_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reports_file: None,
            stagger_step_ms: 100,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければデフォルト
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(HealthReportsError::MissingHome)?;
        Ok(home.join(".config").join("health-reports").join("config.json"))
    }

    /// 環境変数を優先
    pub fn reports_file(&self) -> Option<PathBuf> {
        match std::env::var(REPORTS_FILE_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
            _ => self.reports_file.clone(),
        }
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub fn set_reports_file(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(HealthReportsError::FileNotFound(path.display().to_string()));
        }
        self.reports_file = Some(path);
        Ok(())
    }

    pub fn set_stagger_step_ms(&mut self, ms: u64) -> Result<()> {
        if ms > 10_000 {
            return Err(HealthReportsError::Config(format!(
                "stagger_step_ms は 10000 以下で指定してください: {}",
                ms
            )));
        }
        self.stagger_step_ms = ms;
        Ok(())
    }
}
