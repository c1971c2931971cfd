//! Severity levels that decide which records reach which sinks.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so filters can compare a record's severity against a stored
/// minimum. The ordering is fixed and total; more severe compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// High-volume instrumentation, too noisy outside of development.
    Trace = 0,
    /// State-change details useful when diagnosing issues.
    Debug = 1,
    /// Normal operational milestones.
    #[default]
    Info = 2,
    /// Normal but significant conditions.
    Notice = 3,
    /// Non-fatal anomalies that may need attention.
    Warning = 4,
    /// Failures that prevent an operation from completing.
    Error = 5,
    /// Conditions the process cannot recover from.
    Fatal = 6,
}

impl Severity {
    /// Lowercase, because config files and filter specs use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// The name the `#severity` placeholder substitutes into patterns.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Notice => "Notice",
            Self::Warning => "Warn",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// Convenience for iteration in tests and help output.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Warning,
            Self::Error,
            Self::Fatal,
        ]
    }

    /// Filter specs and config values must degrade on unknown names, not
    /// fail: a typo lowers verbosity instead of taking down the host.
    #[must_use]
    pub fn from_str_or(s: &str, default: Self) -> Self {
        s.parse().unwrap_or(default)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from
/// other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
