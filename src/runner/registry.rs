use std::fmt;

use crate::models::Role;

/// Return types a test or hook member may have.
///
/// `()` members signal failure by panicking (any assertion macro works);
/// `Result` members may also return an error.
///
/// A closure whose body only diverges (`panic!`, `todo!()`, `unreachable!()`)
/// infers `!` as its return type, which does not implement this trait. Annotate
/// the return type:
///
/// ```
/// # use marktest::Registry;
/// # struct Suite;
/// let mut registry = Registry::<Suite>::new();
/// registry.test("not_yet", |_: &mut Suite| -> anyhow::Result<()> { todo!() });
/// ```
pub trait IntoOutcome {
    fn into_outcome(self) -> anyhow::Result<()>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_outcome(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

type MemberFn<C> = Box<dyn Fn(&mut C) -> anyhow::Result<()>>;

/// A named, role-tagged callable registered on a container.
pub struct Member<C> {
    name: String,
    role: Role,
    call: MemberFn<C>,
}

impl<C> Member<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn call(&self, container: &mut C) -> anyhow::Result<()> {
        (self.call)(container)
    }
}

impl<C> fmt::Debug for Member<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Members of a container in the order they were registered.
///
/// Registration order stands in for declaration order: discovery and
/// execution follow it exactly.
pub struct Registry<C> {
    members: Vec<Member<C>>,
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn member<F, R>(&mut self, name: impl Into<String>, role: Role, call: F) -> &mut Self
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoOutcome,
    {
        self.members.push(Member {
            name: name.into(),
            role,
            call: Box::new(move |container| call(container).into_outcome()),
        });
        self
    }

    pub fn before_each<F, R>(&mut self, name: impl Into<String>, call: F) -> &mut Self
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoOutcome,
    {
        self.member(name, Role::BeforeEach, call)
    }

    pub fn after_each<F, R>(&mut self, name: impl Into<String>, call: F) -> &mut Self
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoOutcome,
    {
        self.member(name, Role::AfterEach, call)
    }

    pub fn test<F, R>(&mut self, name: impl Into<String>, call: F) -> &mut Self
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoOutcome,
    {
        self.member(name, Role::Test, call)
    }

    pub fn members(&self) -> &[Member<C>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.members).finish()
    }
}

/// Register container methods under their own names.
///
/// ```
/// use marktest::{Registry, TestContainer, register};
///
/// #[derive(Default)]
/// struct Arithmetic {
///     lhs: i32,
/// }
///
/// impl Arithmetic {
///     fn setup(&mut self) {
///         self.lhs = 1;
///     }
///
///     fn adds(&mut self) -> anyhow::Result<()> {
///         anyhow::ensure!(self.lhs + 1 == 2, "expected 2");
///         Ok(())
///     }
/// }
///
/// impl TestContainer for Arithmetic {
///     fn create() -> anyhow::Result<Self> {
///         Ok(Self::default())
///     }
///
///     fn register(registry: &mut Registry<Self>) {
///         register!(registry, Arithmetic {
///             before_each setup,
///             test adds,
///         });
///     }
/// }
///
/// let results = marktest::run::<Arithmetic>();
/// assert_eq!(results[0].test_name(), "adds");
/// ```
#[macro_export]
macro_rules! register {
    ($registry:expr, $container:ty { $($role:ident $method:ident),* $(,)? }) => {{
        let registry: &mut $crate::Registry<$container> = $registry;
        $( registry.$role(stringify!($method), <$container>::$method); )*
    }};
}
