use std::fmt;

/// The part a registered member plays in a test cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Runs immediately before every test body.
    BeforeEach,
    /// Runs immediately after every test body, whatever its outcome.
    AfterEach,
    Test,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::BeforeEach => "before-each",
            Role::AfterEach => "after-each",
            Role::Test => "test",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
