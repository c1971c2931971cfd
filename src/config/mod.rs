//! TOML configuration that assembles a sink set without code changes.
//!
//! Separated from the struct definitions so the loading and sink-building
//! logic stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig, NativeConfig};

use crate::error::Error;
use crate::filter::Filter;
use crate::fmt::Pattern;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, FileSink, NativeSink, SinkHandle};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A completely empty config file must still produce a working sink set;
/// `#[serde(default)]` on every field keeps zero-config viable.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// The fallback threshold applies to every sink; it belongs above any
    /// specific section.
    pub general: GeneralConfig,
    /// Console output settings, independent of file output.
    pub console: ConsoleConfig,
    /// File output has different concerns than the console: a path and no
    /// choice of stream.
    pub file: FileConfig,
    /// The platform logger needs an identifier, not a pattern; it formats
    /// nothing itself.
    pub native: NativeConfig,
}

impl Config {
    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Fails on unreadable files or TOML syntax errors. Filter strings
    /// inside a syntactically valid file never fail; they degrade.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Fails on TOML syntax errors.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the enabled sinks in a fixed order: console, file, native.
    /// Registration order is delivery order, so the order here is part of
    /// the contract.
    #[must_use]
    pub fn build_sinks(&self) -> Vec<SinkHandle> {
        let mut sinks: Vec<SinkHandle> = Vec::new();

        if self.console.enabled {
            // Unknown stream names fall back to stdout; config degrades,
            // it does not fail.
            let sink = match self.console.stream.as_str() {
                "stderr" => ConsoleSink::stderr(self.build_filter(&self.console.filters)),
                _ => ConsoleSink::stdout(self.build_filter(&self.console.filters)),
            };
            sinks.push(Arc::new(
                sink.pattern(Pattern::new(self.console.pattern.as_str())),
            ));
        }

        if self.file.enabled {
            let sink = FileSink::create(
                self.build_filter(&self.file.filters),
                self.file.resolve_path(),
            )
            .pattern(Pattern::new(self.file.pattern.as_str()));
            sinks.push(Arc::new(sink));
        }

        if self.native.enabled {
            sinks.push(Arc::new(NativeSink::new(
                self.native.ident.as_str(),
                self.build_filter(&self.native.filters),
            )));
        }

        sinks
    }

    /// Sink sections without explicit filters inherit the general threshold
    /// as a wildcard.
    fn build_filter(&self, specs: &[String]) -> Filter {
        if specs.is_empty() {
            return Filter::with_severity(Severity::from_str_or(
                &self.general.level,
                Severity::Info,
            ));
        }
        let mut filter = Filter::new();
        for spec in specs {
            filter.add_spec(spec);
        }
        filter
    }
}
