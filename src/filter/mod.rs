//! Per-sink accept/reject predicate keyed on tag and severity.

use crate::record::Metadata;
use crate::severity::Severity;
use std::collections::BTreeMap;

/// Ordered tag-to-threshold mapping with an optional wildcard entry.
///
/// Tag-specific thresholds override the wildcard, so a sink can run at
/// `warning` globally while one noisy subsystem is opened up to `debug`.
/// A filter with no entries accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    tags: BTreeMap<String, Severity>,
    any: Option<Severity>,
}

impl Filter {
    /// An empty filter matches unconditionally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a plain severity threshold: wildcard entry only.
    #[must_use]
    pub fn with_severity(severity: Severity) -> Self {
        let mut filter = Self::new();
        filter.add_any(severity);
        filter
    }

    /// Exact tag entry first, wildcard second, reject when neither exists.
    /// A record without a tag can only match the wildcard.
    #[must_use]
    pub fn matches(&self, metadata: &Metadata) -> bool {
        if self.is_empty() {
            return true;
        }
        if let Some(tag) = metadata.tag()
            && let Some(min) = self.tags.get(tag)
        {
            return metadata.severity() >= *min;
        }
        if let Some(min) = self.any {
            return metadata.severity() >= min;
        }
        false
    }

    /// Minimum severity for records carrying exactly this tag. The last
    /// write for a given tag wins. `"*"` addresses the wildcard entry.
    pub fn add_tag(&mut self, tag: impl Into<String>, severity: Severity) {
        let tag = tag.into();
        if tag == "*" {
            self.any = Some(severity);
        } else {
            self.tags.insert(tag, severity);
        }
    }

    /// Wildcard threshold applied to records no tag entry claims.
    pub fn add_any(&mut self, severity: Severity) {
        self.any = Some(severity);
    }

    /// Parses `"<tag>:<severity>"`, `"*:<severity>"`, or a bare severity
    /// name (wildcard). An unknown severity name degrades to `Info`, so a
    /// misconfigured filter lowers verbosity instead of failing the host.
    pub fn add_spec(&mut self, spec: &str) {
        match spec.split_once(':') {
            Some((tag, severity)) => {
                self.add_tag(tag, Severity::from_str_or(severity, Severity::Info));
            }
            None => self.add_any(Severity::from_str_or(spec, Severity::Info)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.any.is_none()
    }
}
