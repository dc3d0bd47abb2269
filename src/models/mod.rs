pub mod result;
pub mod role;
pub mod status;

pub use result::{RunSummary, TestResult};
pub use role::Role;
pub use status::TestStatus;
