//! Discarding sink, for muting dispatch without unregistering and for
//! exercising the fan-out path in tests and benches.

use super::Sink;
use crate::filter::Filter;
use crate::record::Metadata;

/// Accepts everything (empty filter) and drops it.
#[derive(Debug, Default)]
pub struct NullSink {
    filter: Filter,
}

impl NullSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for NullSink {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn log(&self, _metadata: &Metadata, _message: &str) {}
}
