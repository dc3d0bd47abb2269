use std::path::PathBuf;

use thiserror::Error;

use crate::report::ReportKind;

/// Failures that escape a test cycle. Test and hook failures never do: they
/// become [`TestResult`](crate::TestResult)s or log lines.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("could not instantiate {container}: {message}")]
    Instantiation {
        container: &'static str,
        message: String,
    },

    #[error("could not write {kind} report to {}: {source}", .path.display())]
    ReportWrite {
        kind: ReportKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode {kind} report: {source}")]
    ReportEncode {
        kind: ReportKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
