use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::HarnessError;
use crate::report::ReportTargets;

pub const CONFIG_FILE: &str = "marktest.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Where the file reports go after a run.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the JSON report, relative to the working directory.
    pub json: PathBuf,
    /// Path of the HTML report, relative to the working directory.
    pub html: PathBuf,
    pub json_enabled: bool,
    pub html_enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            json: PathBuf::from("test-results.json"),
            html: PathBuf::from("test-report.html"),
            json_enabled: true,
            html_enabled: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colour the PASS/FAIL markers in the console summary.
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load `marktest.toml` from `dir`, falling back to defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match Self::load_from(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load a specific file. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, HarnessError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(HarnessError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| HarnessError::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn report_targets(&self) -> ReportTargets {
        ReportTargets {
            json: self
                .report
                .json_enabled
                .then(|| self.report.json.clone()),
            html: self
                .report
                .html_enabled
                .then(|| self.report.html.clone()),
        }
    }
}
