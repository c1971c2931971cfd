#![forbid(unsafe_code)]

//! `loghub` - process-wide log routing with per-sink filtering.
//!
//! Call sites emit severity-tagged records; every registered sink decides
//! through its own [`Filter`] whether a record is accepted, the message is
//! rendered once, and each accepting sink delivers it. Dispatch is
//! synchronous and in-process: a log call either completes or blocks the
//! calling thread for its duration.
//!
//! # Example
//!
//! ```
//! use loghub::{ConsoleSink, Filter, Severity, log, registry};
//! use std::sync::Arc;
//!
//! let mut filter = Filter::with_severity(Severity::Info);
//! filter.add_tag("net", Severity::Debug);
//!
//! registry::global().register(Arc::new(ConsoleSink::stdout(filter)));
//!
//! log!(Severity::Info, "main", "started");
//! log!(Severity::Debug, "net", "handshake took {} ms", 12);
//! ```
//!
//! An owned [`Registry`] works the same way without the process-wide
//! state, for code that prefers explicit injection:
//!
//! ```
//! use loghub::{Metadata, NullSink, Registry, Severity};
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! registry.register(Arc::new(NullSink::new()));
//!
//! let metadata = Metadata::new(Severity::Info).with_tag("net");
//! registry.log(&metadata, format_args!("connected in {} ms", 12));
//! ```
//!
//! Sink I/O runs synchronously on the logging thread: a slow sink (a
//! blocking file write, a platform logger call) delays the call that hit
//! it. That is the accepted trade-off of a synchronous facility; there is
//! no queueing layer.

pub mod conditional;
pub mod config;
pub mod error;
pub mod filter;
pub mod fmt;
mod macros;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;

// Re-exports for convenience
pub use conditional::Conditional;
pub use config::Config;
pub use error::Error;
pub use filter::Filter;
pub use fmt::Pattern;
pub use record::{CallSite, Metadata};
pub use registry::Registry;
pub use severity::{ParseSeverityError, Severity};
pub use sink::{
    CallbackSink, ConsoleSink, FileSink, NativeSink, NullSink, Sink, SinkHandle,
};
