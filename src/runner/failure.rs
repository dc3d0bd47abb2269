use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::thread;

use tracing::debug;

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static QUIET_HOOK: Once = Once::new();

/// What a failed invocation left behind for the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    message: Option<String>,
    location: Option<String>,
}

impl Failure {
    /// Prefer the wrapped cause's message, then the error's own, then nothing.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let cause = error.chain().nth(1).map(|cause| cause.to_string());
        let message = non_empty(cause).or_else(|| non_empty(Some(error.to_string())));
        Self {
            message,
            location: None,
        }
    }

    /// Panic payloads only carry a message when they are a `&str` or `String`.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            Some((*s).to_string())
        } else {
            payload.downcast_ref::<String>().cloned()
        };
        Self {
            message: non_empty(message),
            location: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// `file:line:column` of the panic, when the failure was one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn into_message(self) -> Option<String> {
        self.message
    }
}

/// Run one member, treating a returned error and a panic alike.
pub fn invoke<F>(call: F) -> Result<(), Failure>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match catch_quietly(call) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(Failure::from_error(&error)),
        Err(payload) => {
            let mut failure = Failure::from_panic(payload.as_ref());
            failure.location = PANIC_LOCATION.take();
            debug!(
                location = failure.location().unwrap_or("unknown"),
                reason = failure.message().unwrap_or_default(),
                "member panicked"
            );
            Err(failure)
        }
    }
}

/// `catch_unwind` without the process panic hook printing to stderr.
///
/// Panics on this thread while `call` runs only record their location; panics
/// anywhere else still reach the hook that was installed before.
pub(crate) fn catch_quietly<T>(call: impl FnOnce() -> T) -> thread::Result<T> {
    install_quiet_hook();
    PANIC_LOCATION.take();
    let was_capturing = CAPTURING.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(call));
    CAPTURING.set(was_capturing);
    outcome
}

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(Cell::get) {
                let location = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
                PANIC_LOCATION.set(location);
            } else {
                previous(info);
            }
        }));
    });
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}
