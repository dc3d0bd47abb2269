use std::fs;
use std::path::Path;

use super::ReportKind;
use crate::error::HarnessError;
use crate::models::TestResult;

pub fn to_string(results: &[TestResult]) -> Result<String, HarnessError> {
    serde_json::to_string_pretty(results).map_err(|source| HarnessError::ReportEncode {
        kind: ReportKind::Json,
        source,
    })
}

/// Read back a report produced by [`to_string`] or [`write`].
pub fn parse(content: &str) -> serde_json::Result<Vec<TestResult>> {
    serde_json::from_str(content)
}

pub fn write(results: &[TestResult], path: &Path) -> Result<(), HarnessError> {
    let content = to_string(results)?;
    fs::write(path, content).map_err(|source| HarnessError::ReportWrite {
        kind: ReportKind::Json,
        path: path.to_path_buf(),
        source,
    })
}
