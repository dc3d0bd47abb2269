use serde::{Deserialize, Serialize};

use super::status::TestStatus;

/// Outcome of one test cycle.
///
/// Built only through [`TestResult::pass`] and [`TestResult::fail`], so a
/// passing result never carries a message. A failing one may still lack one
/// when the failure had nothing to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTestResult")]
pub struct TestResult {
    test_name: String,
    status: TestStatus,
    exception_message: Option<String>,
    #[serde(rename = "executionTime")]
    execution_time_ms: u64,
}

/// Wire shape of a result before the pass/fail invariant is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTestResult {
    test_name: String,
    status: TestStatus,
    exception_message: Option<String>,
    execution_time: u64,
}

impl TryFrom<RawTestResult> for TestResult {
    type Error = String;

    fn try_from(raw: RawTestResult) -> Result<Self, Self::Error> {
        match (raw.status, raw.exception_message) {
            (TestStatus::Pass, Some(message)) => Err(format!(
                "passing result `{}` carries an exception message: {message}",
                raw.test_name
            )),
            (TestStatus::Pass, None) => Ok(Self::pass(raw.test_name, raw.execution_time)),
            (TestStatus::Fail, message) => Ok(Self::fail(
                raw.test_name,
                message,
                raw.execution_time,
            )),
        }
    }
}

impl TestResult {
    pub fn pass(test_name: impl Into<String>, execution_time_ms: u64) -> Self {
        Self {
            test_name: test_name.into(),
            status: TestStatus::Pass,
            exception_message: None,
            execution_time_ms,
        }
    }

    pub fn fail(
        test_name: impl Into<String>,
        exception_message: Option<String>,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            status: TestStatus::Fail,
            exception_message,
            execution_time_ms,
        }
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn status(&self) -> TestStatus {
        self.status
    }

    pub fn exception_message(&self) -> Option<&str> {
        self.exception_message.as_deref()
    }

    pub fn execution_time_ms(&self) -> u64 {
        self.execution_time_ms
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Count outcomes. `failed` is derived, so `passed + failed == total` always holds.
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == TestStatus::Pass)
            .count();
        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn pass_never_carries_a_message() {
        let result = TestResult::pass("a", 3);
        assert_eq!(result.status(), TestStatus::Pass);
        assert_eq!(result.exception_message(), None);
        assert_eq!(result.execution_time_ms(), 3);
    }

    #[test]
    fn serializes_with_report_field_names() {
        let result = TestResult::fail("b", Some("expected 2 but got 3".into()), 7);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "testName": "b",
                "status": "FAIL",
                "exceptionMessage": "expected 2 but got 3",
                "executionTime": 7
            })
        );
    }

    #[test]
    fn absent_message_serializes_as_null() {
        let value = serde_json::to_value(TestResult::pass("a", 0)).unwrap();
        assert!(value["exceptionMessage"].is_null());
    }

    #[test]
    fn passing_result_with_message_is_rejected() {
        let json = r#"{"testName":"a","status":"PASS","exceptionMessage":"x","executionTime":1}"#;
        let err = serde_json::from_str::<TestResult>(json).unwrap_err();
        assert!(err.to_string().contains("carries an exception message"), "{err}");
    }

    #[test]
    fn deserialized_results_go_through_constructors() {
        let json = r#"{"testName":"b","status":"FAIL","exceptionMessage":null,"executionTime":4}"#;
        let result: TestResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, TestResult::fail("b", None, 4));

        let json = r#"{"testName":"a","status":"PASS","exceptionMessage":null,"executionTime":2}"#;
        let result: TestResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, TestResult::pass("a", 2));
    }

    #[test]
    fn empty_run_summarizes_to_zero() {
        assert_eq!(RunSummary::from_results(&[]), RunSummary::default());
        assert!(RunSummary::default().all_passed());
    }

    proptest! {
        #[test]
        fn passed_plus_failed_is_total(outcomes in proptest::collection::vec(any::<bool>(), 0..64)) {
            let results: Vec<TestResult> = outcomes
                .iter()
                .enumerate()
                .map(|(i, &ok)| {
                    if ok {
                        TestResult::pass(format!("t{i}"), 0)
                    } else {
                        TestResult::fail(format!("t{i}"), None, 0)
                    }
                })
                .collect();
            let summary = RunSummary::from_results(&results);
            prop_assert_eq!(summary.total, outcomes.len());
            prop_assert_eq!(summary.passed + summary.failed, summary.total);
            prop_assert_eq!(summary.passed, outcomes.iter().filter(|&&ok| ok).count());
        }
    }
}
