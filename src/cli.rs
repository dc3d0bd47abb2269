//! Command-line entry point shared by the bundled binary and by user test
//! binaries (`harness = false` targets can call [`main`] with their container).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use crate::config::Config;
use crate::models::RunSummary;
use crate::report::{self, console};
use crate::runner::{TestContainer, try_run};

/// Exit status when the container could not be created.
pub const EXIT_INSTANTIATION: u8 = 2;

/// Run a test container and report the results
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file (defaults to marktest.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, value_name = "PATH", conflicts_with = "no_json")]
    pub json: Option<PathBuf>,

    /// Where to write the HTML report
    #[arg(long, value_name = "PATH", conflicts_with = "no_html")]
    pub html: Option<PathBuf>,

    /// Skip the JSON report
    #[arg(long)]
    pub no_json: bool,

    /// Skip the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Print the summary without ANSI colours
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Resolve the effective config: file first, then flags on top.
    pub fn resolve_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => match Config::load_from(path) {
                Ok(Some(config)) => config,
                Ok(None) => {
                    warn!(path = %path.display(), "config file not found, using defaults");
                    Config::default()
                }
                Err(e) => {
                    error!(error = %e, "using default config");
                    Config::default()
                }
            },
            None => Config::load(&std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        };

        if let Some(json) = &self.json {
            config.report.json = json.clone();
            config.report.json_enabled = true;
        }
        if let Some(html) = &self.html {
            config.report.html = html.clone();
            config.report.html_enabled = true;
        }
        if self.no_json {
            config.report.json_enabled = false;
        }
        if self.no_html {
            config.report.html_enabled = false;
        }
        if self.no_color {
            config.console.color = false;
        }
        config
    }
}

/// Parse the process arguments, run `C`, print and write the reports.
pub fn main<C: TestContainer>() -> ExitCode {
    crate::logging::init();
    run_with::<C>(&Args::parse())
}

/// Exit codes: 0 all passed, 1 some test failed, 2 the container could not be
/// created. Report write failures are printed but do not change the code.
pub fn run_with<C: TestContainer>(args: &Args) -> ExitCode {
    let config = args.resolve_config();

    let (results, instantiated) = match try_run::<C>() {
        Ok(results) => (results, true),
        Err(e) => {
            error!(error = %e, "run aborted");
            eprintln!("error: {}", e);
            (Vec::new(), false)
        }
    };

    console::print(&results, config.console.color);
    report::write_reports(&results, &config.report_targets());

    if !instantiated {
        ExitCode::from(EXIT_INSTANTIATION)
    } else if RunSummary::from_results(&results).all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
