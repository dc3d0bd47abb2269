use std::fmt;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::report::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TestStatus::Pass => theme::GREEN,
            TestStatus::Fail => theme::RED,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestStatus::Fail)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
