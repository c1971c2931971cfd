//! Adapter onto the platform's native logger.
//!
//! On unix that is syslog, reached through the local datagram socket; no
//! pattern formatting happens here, the severity maps to a priority and the
//! rendered message is handed over as-is. Platforms without a supported
//! backend get a sink that constructs fine and stays silent.

use super::Sink;
use crate::filter::Filter;
use crate::record::Metadata;
use crate::severity::Severity;

/// Never fails to construct: a missing platform backend produces total
/// silence for this sink, queryable via [`is_available`](Self::is_available),
/// never a crash and never substitute output mixed into the stream.
#[derive(Debug)]
pub struct NativeSink {
    filter: Filter,
    backend: Option<backend::Backend>,
}

impl NativeSink {
    /// `ident` prefixes each record in the platform log.
    #[must_use]
    pub fn new(ident: impl Into<String>, filter: Filter) -> Self {
        Self {
            filter,
            backend: backend::Backend::open(ident.into()),
        }
    }

    /// Whether a platform backend is actually connected.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.backend.is_some()
    }
}

impl Sink for NativeSink {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn log(&self, metadata: &Metadata, message: &str) {
        if let Some(backend) = &self.backend {
            backend.send(metadata.severity(), message);
        }
    }
}

#[cfg(unix)]
mod backend {
    use super::Severity;
    use std::os::unix::net::UnixDatagram;
    use std::process;

    /// `user` facility; the priority byte is `facility | severity`.
    const LOG_USER: u8 = 1 << 3;

    /// BSD syslog over the local datagram socket.
    #[derive(Debug)]
    pub struct Backend {
        socket: UnixDatagram,
        ident: String,
    }

    impl Backend {
        pub fn open(ident: String) -> Option<Self> {
            let socket = UnixDatagram::unbound().ok()?;
            socket.connect("/dev/log").ok()?;
            Some(Self { socket, ident })
        }

        /// One RFC 3164 datagram per record; send failures are dropped.
        pub fn send(&self, severity: Severity, message: &str) {
            let line = format!(
                "<{}>{}[{}]: {}",
                LOG_USER | priority(severity),
                self.ident,
                process::id(),
                message
            );
            let _ = self.socket.send(line.as_bytes());
        }
    }

    /// The syslog ladder is coarser than ours: trace and debug both map to
    /// LOG_DEBUG, fatal maps to LOG_CRIT.
    const fn priority(severity: Severity) -> u8 {
        match severity {
            Severity::Trace | Severity::Debug => 7,
            Severity::Info => 6,
            Severity::Notice => 5,
            Severity::Warning => 4,
            Severity::Error => 3,
            Severity::Fatal => 2,
        }
    }
}

#[cfg(not(unix))]
mod backend {
    use super::Severity;

    /// No supported platform logger on this target; the sink stays silent.
    #[derive(Debug)]
    pub struct Backend;

    impl Backend {
        pub fn open(_ident: String) -> Option<Self> {
            None
        }

        pub fn send(&self, _severity: Severity, _message: &str) {}
    }
}
