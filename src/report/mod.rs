//! Presentation of a finished run.
//!
//! Everything here works on the completed result list; nothing runs while
//! tests are executing.

pub mod console;
pub mod html;
pub mod json;
pub mod theme;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::HarnessError;
use crate::models::TestResult;

/// Shown wherever a failure carried no message.
pub const MISSING_MESSAGE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Json,
    Html,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportKind::Json => "JSON",
            ReportKind::Html => "HTML",
        })
    }
}

/// File sinks to write after a run. `None` disables a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTargets {
    pub json: Option<PathBuf>,
    pub html: Option<PathBuf>,
}

/// Write every enabled file report, JSON first.
///
/// A sink that fails is reported on stderr and in the log, then the next one
/// is attempted anyway. The failures are returned so callers can decide on an
/// exit code; the results themselves are never touched.
pub fn write_reports(results: &[TestResult], targets: &ReportTargets) -> Vec<HarnessError> {
    let mut failures = Vec::new();
    if let Some(path) = &targets.json {
        record(ReportKind::Json, path, json::write(results, path), &mut failures);
    }
    if let Some(path) = &targets.html {
        record(ReportKind::Html, path, html::write(results, path), &mut failures);
    }
    failures
}

fn record(
    kind: ReportKind,
    path: &Path,
    outcome: Result<(), HarnessError>,
    failures: &mut Vec<HarnessError>,
) {
    match outcome {
        Ok(()) => {
            info!(%kind, path = %path.display(), "report written");
            println!("{} report written to: {}", kind, path.display());
        }
        Err(e) => {
            error!(%kind, path = %path.display(), error = %e, "report sink failed");
            eprintln!("Failed to write {} report: {}", kind, e);
            failures.push(e);
        }
    }
}
