use tracing::warn;

use crate::models::Role;

use super::registry::{Member, Registry};

/// Registered members classified by role. Building one invokes nothing.
pub struct Discovery<'r, C> {
    tests: Vec<&'r Member<C>>,
    before_each: Option<&'r Member<C>>,
    after_each: Option<&'r Member<C>>,
}

impl<'r, C> Discovery<'r, C> {
    /// Classify every member of `registry`.
    ///
    /// Tests keep registration order. When a hook role is registered more
    /// than once, the last registration wins and the shadowed one is logged.
    pub fn of(registry: &'r Registry<C>) -> Self {
        let mut tests = Vec::new();
        let mut before_each = None;
        let mut after_each = None;

        for member in registry.members() {
            match member.role() {
                Role::Test => tests.push(member),
                Role::BeforeEach => replace_hook(&mut before_each, member),
                Role::AfterEach => replace_hook(&mut after_each, member),
            }
        }

        Self {
            tests,
            before_each,
            after_each,
        }
    }

    pub fn tests(&self) -> &[&'r Member<C>] {
        &self.tests
    }

    pub fn before_each(&self) -> Option<&'r Member<C>> {
        self.before_each
    }

    pub fn after_each(&self) -> Option<&'r Member<C>> {
        self.after_each
    }
}

fn replace_hook<'r, C>(slot: &mut Option<&'r Member<C>>, member: &'r Member<C>) {
    if let Some(shadowed) = slot.replace(member) {
        warn!(
            role = %member.role(),
            shadowed = shadowed.name(),
            using = member.name(),
            "hook registered more than once, keeping the last one"
        );
    }
}
