use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::{MISSING_MESSAGE, ReportKind};
use crate::error::HarnessError;
use crate::models::TestResult;

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Render a standalone HTML page with one table row per result.
pub fn render(results: &[TestResult]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Test Report</title>\n");
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">");
    html.push_str("</head>\n<body class=\"container mt-5\">\n");
    html.push_str("<h1 class=\"mb-4\">Test Report</h1>\n");
    html.push_str("<table class=\"table table-bordered\">\n");
    html.push_str(
        "<thead><tr><th>Test Name</th><th>Status</th><th>Exception</th><th>Execution Time (ms)</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");

    for result in results {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(result.test_name()),
            result.status(),
            escape(result.exception_message().unwrap_or(MISSING_MESSAGE)),
            result.execution_time_ms()
        );
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

pub fn write(results: &[TestResult], path: &Path) -> Result<(), HarnessError> {
    fs::write(path, render(results)).map_err(|source| HarnessError::ReportWrite {
        kind: ReportKind::Html,
        path: path.to_path_buf(),
        source,
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
