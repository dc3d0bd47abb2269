use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log filter directives, e.g. `MARKTEST_LOG=marktest=debug`.
pub const LOG_ENV: &str = "MARKTEST_LOG";
/// When set, logs go to this file (truncated) instead of stderr.
pub const DEBUG_FILE_ENV: &str = "MARKTEST_DEBUG";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let log_file = open_log_file();
    let default_level = if log_file.is_some() { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match log_file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}

fn open_log_file() -> Option<File> {
    std::env::var(DEBUG_FILE_ENV).ok().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
    })
}
