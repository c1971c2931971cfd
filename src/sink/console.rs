//! Formatted logging to the process's standard streams.

use super::Sink;
use crate::filter::Filter;
use crate::fmt::Pattern;
use crate::record::Metadata;
use std::io::{self, Write};

/// Which standard stream lines go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Text sink for stdout or stderr, rendering through the shared [`Pattern`].
/// Stream write failures are dropped: the logger must never fail the host
/// application.
#[derive(Debug)]
pub struct ConsoleSink {
    stream: Stream,
    filter: Filter,
    pattern: Pattern,
}

impl ConsoleSink {
    /// Formatted logging to stdout with the default pattern.
    #[must_use]
    pub fn stdout(filter: Filter) -> Self {
        Self {
            stream: Stream::Stdout,
            filter,
            pattern: Pattern::default(),
        }
    }

    /// Formatted logging to stderr with the default pattern.
    #[must_use]
    pub fn stderr(filter: Filter) -> Self {
        Self {
            stream: Stream::Stderr,
            filter,
            pattern: Pattern::default(),
        }
    }

    /// Overrides the line layout.
    #[must_use]
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }
}

impl Sink for ConsoleSink {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn log(&self, metadata: &Metadata, message: &str) {
        let line = self.pattern.render(metadata, message);
        let _ = match self.stream {
            Stream::Stdout => writeln!(io::stdout(), "{line}"),
            Stream::Stderr => writeln!(io::stderr(), "{line}"),
        };
    }

    fn flush(&self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}
