//! Runner configuration
//!
//! Artifact file labels and the run directory name are configured
//! externally; file names embed the configured label, so changing a label
//! here changes the names the report-rendering collaborator must look for.

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Externally-configured naming for run artifacts
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Label embedded in specification snapshot file names
    #[serde(default = "default_specification_label")]
    pub specification_label: String,

    /// Label embedded in report file names
    #[serde(default = "default_report_label")]
    pub report_label: String,

    /// Label embedded in result file names
    #[serde(default = "default_results_label")]
    pub results_label: String,

    /// Name of the per-module directory holding run artifacts
    #[serde(default = "default_run_dir_name")]
    pub run_dir_name: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            specification_label: default_specification_label(),
            report_label: default_report_label(),
            results_label: default_results_label(),
            run_dir_name: default_run_dir_name(),
        }
    }
}

fn default_specification_label() -> String {
    "specification".to_string()
}
fn default_report_label() -> String {
    "report".to_string()
}
fn default_results_label() -> String {
    "results".to_string()
}
fn default_run_dir_name() -> String {
    "spec-runs".to_string()
}

impl RunnerConfig {
    /// Load configuration from a TOML file
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
