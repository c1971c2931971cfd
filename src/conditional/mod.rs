//! Call-time boolean gate for sampled or switched logging.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Wraps a zero-argument predicate evaluated exactly once per gated log
/// statement, before any sink or filter is consulted. Stateful policies
/// (sampling counters) live inside the closure, so the gate behaves the
/// same whether it is built on the call stack or held across calls.
///
/// Clones share the underlying predicate and its state: a sampling counter
/// keeps advancing globally no matter which clone is evaluated.
#[derive(Clone)]
pub struct Conditional {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Conditional {
    #[must_use]
    pub fn new(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// True on every n-th evaluation: `every(3)` fires on the 3rd, 6th, 9th
    /// call. `every(0)` is treated as `every(1)`.
    #[must_use]
    pub fn every(n: u64) -> Self {
        let n = n.max(1);
        let count = AtomicU64::new(0);
        Self::new(move || {
            let seen = count.fetch_add(1, Ordering::Relaxed) + 1;
            seen % n == 0
        })
    }

    /// Evaluation may have side effects (advancing a counter); callers must
    /// invoke this at most once per log statement.
    #[must_use]
    pub fn is_true(&self) -> bool {
        (self.predicate)()
    }
}

impl Default for Conditional {
    /// An ungated statement logs unconditionally.
    fn default() -> Self {
        Self::new(|| true)
    }
}

impl From<bool> for Conditional {
    fn from(value: bool) -> Self {
        Self::new(move || value)
    }
}

impl fmt::Debug for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printing the outcome would evaluate the predicate and advance
        // sampling state; the debug form stays opaque instead.
        f.write_str("Conditional(..)")
    }
}
