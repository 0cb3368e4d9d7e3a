//! Configuration handling for the intake form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where submissions are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Write submissions to the application log
    #[default]
    Log,
    /// Append submissions to a JSON-lines file
    File,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Submission sink
    pub sink: Option<SinkKind>,
    /// File used by the file sink
    pub submissions_path: Option<PathBuf>,
    /// File the application log is written to
    pub log_path: Option<PathBuf>,
}

impl IntakeConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "intake", "intake-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    /// Configured submissions file, or `submissions.jsonl` in the data dir
    pub fn submissions_path(&self) -> Option<PathBuf> {
        self.submissions_path.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("submissions.jsonl"))
        })
    }

    /// Configured log file, or `intake-tui.log` in the data dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("intake-tui.log")))
    }
}
