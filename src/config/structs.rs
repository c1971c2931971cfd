//! Configuration struct definitions.

use serde::Deserialize;
use std::path::PathBuf;

/// Settings that apply to every sink.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Wildcard threshold for sinks that list no filters of their own.
    /// Unknown names degrade to `info`.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Console sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
    /// Target stream (stdout, stderr).
    pub stream: String,
    /// Line pattern.
    pub pattern: String,
    /// Filter specs, `"<tag>|*:<severity>"`.
    pub filters: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stream: "stdout".to_string(),
            pattern: "%Y-%m-%d %H-%M-%S.#ms [#severity] (#tag_func)".to_string(),
            filters: Vec::new(),
        }
    }
}

/// File sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Target file; empty means the platform state directory.
    pub path: String,
    /// Line pattern.
    pub pattern: String,
    /// Filter specs, `"<tag>|*:<severity>"`.
    pub filters: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: String::new(),
            pattern: "%Y-%m-%d %H-%M-%S.#ms [#severity] (#tag_func)".to_string(),
            filters: Vec::new(),
        }
    }
}

impl FileConfig {
    /// `~` and `$VARS` expand; an empty path lands in the platform state
    /// directory. Expansion failures keep the raw path, consistent with
    /// config never being fatal.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        if self.path.is_empty() {
            return default_log_path();
        }
        match shellexpand::full(&self.path) {
            Ok(expanded) => PathBuf::from(expanded.into_owned()),
            Err(_) => PathBuf::from(self.path.as_str()),
        }
    }
}

fn default_log_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "loghub").map_or_else(
        || PathBuf::from("loghub.log"),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("loghub.log")
        },
    )
}

/// Native platform logger settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NativeConfig {
    /// Enable the platform logger.
    pub enabled: bool,
    /// Identifier the platform logger prefixes each record with.
    pub ident: String,
    /// Filter specs, `"<tag>|*:<severity>"`.
    pub filters: Vec<String>,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ident: "loghub".to_string(),
            filters: Vec::new(),
        }
    }
}
