//! The sink list and its fan-out dispatch.
//!
//! A [`Registry`] can be owned and passed around explicitly; [`global`] is
//! the shared instance the `log!`/`clog!` macros use, created on first
//! access so there is no initialization-order hazard.

use crate::conditional::Conditional;
use crate::record::Metadata;
use crate::sink::SinkHandle;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Thread-safe, registration-ordered collection of sinks.
///
/// The mutex guards the list itself, not delivery: `log` clones the handle
/// list under the lock and dispatches on that snapshot. A log call
/// therefore sees either the full old list or the full new list around a
/// concurrent [`replace`](Self::replace), and a sink that logs from inside
/// its own `log` re-enters without deadlocking.
#[derive(Default)]
pub struct Registry {
    sinks: Mutex<Vec<SinkHandle>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sink; it is visited after everything registered before
    /// it.
    pub fn register(&self, sink: SinkHandle) {
        self.lock().push(sink);
    }

    /// Appends a batch, preserving the given order.
    pub fn register_many(&self, sinks: impl IntoIterator<Item = SinkHandle>) {
        self.lock().extend(sinks);
    }

    /// Clears and appends in one locked step: concurrent log calls see the
    /// old set or the new set, never a partially built one.
    pub fn replace(&self, sinks: impl IntoIterator<Item = SinkHandle>) {
        let mut guard = self.lock();
        guard.clear();
        guard.extend(sinks);
    }

    /// Removes every registration of exactly this handle (pointer identity,
    /// not sink contents).
    pub fn unregister(&self, sink: &SinkHandle) {
        self.lock().retain(|existing| !Arc::ptr_eq(existing, sink));
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.lock().len()
    }

    /// Fan-out: visits the current sinks in registration order, renders the
    /// message lazily when the first filter accepts, and reuses that one
    /// string for every later match. An empty rendered message aborts the
    /// whole call; no sink sees it.
    pub fn log(&self, metadata: &Metadata, args: fmt::Arguments<'_>) {
        let sinks = self.snapshot();
        let mut rendered: Option<String> = None;
        for sink in &sinks {
            if !sink.filter().matches(metadata) {
                continue;
            }
            if rendered.is_none() {
                let message = fmt::format(args);
                if message.is_empty() {
                    return;
                }
                rendered = Some(message);
            }
            if let Some(message) = &rendered {
                sink.log(metadata, message);
            }
        }
    }

    /// Same fan-out behind a gate evaluated exactly once, before any sink
    /// or filter is consulted, so closure side effects (sampling counters)
    /// advance even when nothing ends up delivered.
    pub fn log_if(&self, condition: &Conditional, metadata: &Metadata, args: fmt::Arguments<'_>) {
        if condition.is_true() {
            self.log(metadata, args);
        }
    }

    /// Flushes every registered sink.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> io::Result<()> {
        for sink in &self.snapshot() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Cheap clone of the handle list; delivery happens outside the lock.
    fn snapshot(&self) -> Vec<SinkHandle> {
        self.lock().clone()
    }

    /// Lock poisoning cannot leave the list half-mutated; recover and keep
    /// going.
    fn lock(&self) -> MutexGuard<'_, Vec<SinkHandle>> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// The process-wide registry behind the `log!`/`clog!` macros. `OnceLock`
/// makes first use from any thread safe; it lives until process exit and is
/// mutated only through the registration operations.
#[must_use]
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}
