use std::any::type_name;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::error::HarnessError;
use crate::models::{RunSummary, TestResult};

use super::TestContainer;
use super::discovery::Discovery;
use super::failure::{Failure, catch_quietly, invoke};
use super::registry::{Member, Registry};

/// Run every test registered on `C` and collect one result per test.
///
/// A container that cannot be created yields an empty result list; the error
/// is logged. Use [`try_run`] to observe it instead.
pub fn run<C: TestContainer>() -> Vec<TestResult> {
    match try_run::<C>() {
        Ok(results) => results,
        Err(e) => {
            error!(error = %e, "run aborted before any test executed");
            Vec::new()
        }
    }
}

/// Like [`run`], but surfaces a failed instantiation.
pub fn try_run<C: TestContainer>() -> Result<Vec<TestResult>, HarnessError> {
    let container_name = type_name::<C>();
    let mut container = instantiate::<C>()?;

    let mut registry = Registry::new();
    C::register(&mut registry);
    let discovery = Discovery::of(&registry);

    info!(
        container = container_name,
        tests = discovery.tests().len(),
        "starting run"
    );
    let results = run_discovered(&mut container, &discovery);

    let summary = RunSummary::from_results(&results);
    info!(
        container = container_name,
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "run finished"
    );
    Ok(results)
}

/// Execute one test cycle per discovered test, in discovery order, against a
/// single shared container.
pub fn run_discovered<C>(container: &mut C, discovery: &Discovery<'_, C>) -> Vec<TestResult> {
    discovery
        .tests()
        .iter()
        .map(|test| run_cycle(container, test, discovery))
        .collect()
}

fn instantiate<C: TestContainer>() -> Result<C, HarnessError> {
    let failure = match catch_quietly(C::create) {
        Ok(Ok(container)) => return Ok(container),
        Ok(Err(e)) => Failure::from_error(&e),
        Err(payload) => Failure::from_panic(payload.as_ref()),
    };
    Err(HarnessError::Instantiation {
        container: type_name::<C>(),
        message: failure
            .into_message()
            .unwrap_or_else(|| "constructor failed without a message".into()),
    })
}

fn run_cycle<C>(container: &mut C, test: &Member<C>, discovery: &Discovery<'_, C>) -> TestResult {
    debug!(test = test.name(), "starting test cycle");

    let setup = discovery
        .before_each()
        .map(|hook| timed(|| invoke(|| hook.call(container))));

    // A failed setup skips the body and keeps the setup's elapsed time.
    let (outcome, elapsed) = match setup {
        Some((Err(failure), elapsed)) => {
            debug!(test = test.name(), "before-each failed, skipping body");
            (Err(failure), elapsed)
        }
        _ => timed(|| invoke(|| test.call(container))),
    };

    if let Some(hook) = discovery.after_each()
        && let Err(failure) = invoke(|| hook.call(container))
    {
        warn!(
            test = test.name(),
            hook = hook.name(),
            error = failure.message().unwrap_or_default(),
            "after-each failed, result unchanged"
        );
    }

    let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let result = match outcome {
        Ok(()) => TestResult::pass(test.name(), millis),
        Err(failure) => TestResult::fail(test.name(), failure.into_message(), millis),
    };
    debug!(test = test.name(), status = %result.status(), millis, "test cycle finished");
    result
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;
    use crate::models::TestStatus;

    #[derive(Default)]
    struct Slow {
        log: Vec<&'static str>,
    }

    fn slow_setup(s: &mut Slow) {
        s.log.push("setup");
        thread::sleep(Duration::from_millis(60));
    }

    fn quick(s: &mut Slow) {
        s.log.push("body");
    }

    fn teardown(s: &mut Slow) {
        s.log.push("teardown");
        thread::sleep(Duration::from_millis(60));
    }

    #[test]
    fn body_time_excludes_hooks() {
        let mut registry = Registry::<Slow>::new();
        registry
            .before_each("slow_setup", slow_setup)
            .test("quick", quick)
            .after_each("teardown", teardown);

        let mut slow = Slow::default();
        let results = run_discovered(&mut slow, &Discovery::of(&registry));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status(), TestStatus::Pass);
        assert!(results[0].execution_time_ms() < 60);
        assert_eq!(slow.log, ["setup", "body", "teardown"]);
    }

    #[test]
    fn failed_setup_is_timed_instead_of_body() {
        let mut registry = Registry::<Slow>::new();
        registry
            .before_each("slow_setup", |s: &mut Slow| -> anyhow::Result<()> {
                slow_setup(s);
                anyhow::bail!("setup broke")
            })
            .test("quick", quick);

        let mut slow = Slow::default();
        let results = run_discovered(&mut slow, &Discovery::of(&registry));

        assert_eq!(results[0].exception_message(), Some("setup broke"));
        assert!(results[0].execution_time_ms() >= 60);
        assert_eq!(slow.log, ["setup"]);
    }

    #[test]
    fn after_each_runs_even_when_body_fails() {
        let mut registry = Registry::<Slow>::new();
        registry
            .test("explodes", |_: &mut Slow| -> anyhow::Result<()> {
                panic!("kaboom")
            })
            .after_each("teardown", |s: &mut Slow| s.log.push("teardown"));

        let mut slow = Slow::default();
        let results = run_discovered(&mut slow, &Discovery::of(&registry));

        assert_eq!(results[0].status(), TestStatus::Fail);
        assert_eq!(results[0].exception_message(), Some("kaboom"));
        assert_eq!(slow.log, ["teardown"]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn after_each_failure_is_logged_under_error() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let mut registry = Registry::<Slow>::new();
        registry
            .test("quick", quick)
            .after_each("td", |_: &mut Slow| -> anyhow::Result<()> {
                anyhow::bail!("cleanup detail")
            });

        let mut slow = Slow::default();
        let results = tracing::subscriber::with_default(subscriber, || {
            run_discovered(&mut slow, &Discovery::of(&registry))
        });
        assert_eq!(results[0].status(), TestStatus::Pass);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("after-each failed, result unchanged"), "{output}");
        assert!(output.contains("error=\"cleanup detail\""), "{output}");
    }
}
