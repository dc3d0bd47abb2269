use std::path::Path;
use std::process::ExitCode;

use anyhow::bail;
use marktest::cli::{Args, run_with};
use marktest::{Registry, TestContainer, report::json};

struct Green;

impl TestContainer for Green {
    fn create() -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn register(registry: &mut Registry<Self>) {
        registry.test("ok", |_: &mut Self| {});
    }
}

struct Red;

impl TestContainer for Red {
    fn create() -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn register(registry: &mut Registry<Self>) {
        registry
            .test("ok", |_: &mut Self| {})
            .test("broken", |_: &mut Self| -> anyhow::Result<()> { bail!("nope") });
    }
}

struct Absent;

impl TestContainer for Absent {
    fn create() -> anyhow::Result<Self> {
        bail!("cannot construct")
    }

    fn register(_: &mut Registry<Self>) {}
}

fn args_in(dir: &Path) -> Args {
    Args {
        config: Some(dir.join("absent.toml")),
        json: Some(dir.join("results.json")),
        html: Some(dir.join("report.html")),
        no_color: true,
        ..Args::default()
    }
}

fn same(a: ExitCode, b: ExitCode) -> bool {
    format!("{a:?}") == format!("{b:?}")
}

#[test]
fn all_green_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();
    let code = run_with::<Green>(&args_in(dir.path()));
    assert!(same(code, ExitCode::SUCCESS));
    assert!(dir.path().join("report.html").exists());
}

#[test]
fn failures_exit_with_one_and_still_write_reports() {
    let dir = tempfile::tempdir().unwrap();
    let code = run_with::<Red>(&args_in(dir.path()));
    assert!(same(code, ExitCode::FAILURE));

    let written = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
    let results = json::parse(&written).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].exception_message(), Some("nope"));
}

#[test]
fn unbuildable_container_writes_empty_reports() {
    let dir = tempfile::tempdir().unwrap();
    let code = run_with::<Absent>(&args_in(dir.path()));
    assert!(same(code, ExitCode::from(marktest::cli::EXIT_INSTANTIATION)));

    let written = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
    assert!(json::parse(&written).unwrap().is_empty());
}
