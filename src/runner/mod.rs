pub mod discovery;
pub mod engine;
pub mod failure;
pub mod registry;

pub use discovery::Discovery;
pub use engine::{run, run_discovered, try_run};
pub use failure::Failure;
pub use registry::{IntoOutcome, Member, Registry};

/// A type whose methods are registered as tests and lifecycle hooks.
///
/// The engine creates exactly one instance per run and hands the same
/// instance to every hook and test in turn, so state written by one test is
/// visible to the tests after it. Reset anything that must not leak in a
/// before-each hook.
pub trait TestContainer: Sized {
    /// Zero-argument constructor. An error or a panic here aborts the run
    /// with no results.
    fn create() -> anyhow::Result<Self>;

    /// Declare the container's members, in declaration order.
    fn register(registry: &mut Registry<Self>);
}
