//! Marker-driven test harness.
//!
//! A [`TestContainer`] registers its methods as tests, a before-each hook and
//! an after-each hook. [`run`] creates the container once, runs every test
//! between the hooks in registration order and returns one [`TestResult`] per
//! test. The [`report`] module turns that list into a console summary, a JSON
//! file and an HTML page.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod runner;

pub use error::HarnessError;
pub use models::{Role, RunSummary, TestResult, TestStatus};
pub use runner::{
    Discovery, Failure, IntoOutcome, Member, Registry, TestContainer, run, run_discovered, try_run,
};
