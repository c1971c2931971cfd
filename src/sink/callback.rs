//! Forwarding raw records to user code.

use super::Sink;
use crate::filter::Filter;
use crate::record::Metadata;
use std::fmt;

/// Hands every accepted record to a user closure with no formatting
/// applied: the callback sees the metadata and the dispatched message text
/// in full fidelity, unlike the pattern-rendering text sinks.
pub struct CallbackSink {
    filter: Filter,
    callback: Box<dyn Fn(&Metadata, &str) + Send + Sync>,
}

impl CallbackSink {
    #[must_use]
    pub fn new(filter: Filter, callback: impl Fn(&Metadata, &str) + Send + Sync + 'static) -> Self {
        Self {
            filter,
            callback: Box::new(callback),
        }
    }
}

impl Sink for CallbackSink {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn log(&self, metadata: &Metadata, message: &str) {
        (self.callback)(metadata, message);
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
