use std::fmt::Write;

use crossterm::style::{Stylize, style};

use super::{MISSING_MESSAGE, theme};
use crate::models::{RunSummary, TestResult};

/// Render the end-of-run summary followed by one line per test.
pub fn render(results: &[TestResult], color: bool) -> String {
    let summary = RunSummary::from_results(results);
    let paint = |text: &str, c| {
        if color {
            style(text).with(c).to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", paint("=== Test Summary ===", theme::MAUVE));
    let _ = writeln!(out, "Total tests run: {}", summary.total);
    let _ = writeln!(out, "Passed: {}", summary.passed);
    let _ = writeln!(out, "Failed: {}", summary.failed);
    let _ = writeln!(out, "{}", paint("====================", theme::MAUVE));
    let _ = writeln!(out);
    let _ = writeln!(out, "Detailed Results:");

    for result in results {
        let status = result.status();
        let _ = writeln!(
            out,
            "Test: {} | Status: {}",
            result.test_name(),
            paint(status.as_str(), status.color())
        );
        if status.is_failure() {
            let reason = match result.exception_message() {
                Some(message) => message.to_string(),
                None => paint(MISSING_MESSAGE, theme::OVERLAY0),
            };
            let _ = writeln!(out, "Reason: {}", reason);
        }
    }
    out
}

pub fn print(results: &[TestResult], color: bool) {
    print!("{}", render(results, color));
}
