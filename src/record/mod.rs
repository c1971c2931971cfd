//! Per-record metadata, captured once at the call site and never mutated.

use crate::severity::Severity;
use chrono::{DateTime, Local};
use std::thread::{self, ThreadId};

/// Function, file, and line of the emitting call site. The `log!`/`clog!`
/// macros fill this in; the routing core treats it as opaque display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    name: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(name: &'static str, file: &'static str, line: u32) -> Self {
        Self { name, file, line }
    }

    /// Function (or module path) name, the `#function` placeholder text.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Immutable bundle describing one log record. Built exactly once per log
/// call and passed by reference through filtering, formatting, and delivery.
#[derive(Debug, Clone)]
pub struct Metadata {
    severity: Severity,
    tag: Option<String>,
    call_site: Option<CallSite>,
    timestamp: Option<DateTime<Local>>,
    thread_id: ThreadId,
}

impl Metadata {
    /// Captures the wall clock and the current thread at construction, so
    /// two records on the same tick still differ down to milliseconds.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            tag: None,
            call_site: None,
            timestamp: Some(Local::now()),
            thread_id: thread::current().id(),
        }
    }

    /// An absent tag is distinct from an empty one: only a present tag
    /// takes part in exact filter lookup and `#tag` substitution.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub const fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    /// Overrides the captured wall-clock time. Tests and replayed records
    /// need a fixed timestamp instead of "now".
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// A record without a timestamp skips strftime expansion entirely.
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn call_site(&self) -> Option<&CallSite> {
        self.call_site.as_ref()
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        self.timestamp
    }

    /// Thread the record originated on.
    #[must_use]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }
}
