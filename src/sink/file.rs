//! Formatted logging to a single file through one held handle.

use super::Sink;
use crate::filter::Filter;
use crate::fmt::Pattern;
use crate::record::Metadata;
use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Text sink appending rendered lines to one file.
///
/// Construction never fails: when the file cannot be opened the sink stays
/// silent and reports that through [`is_open`](Self::is_open), because
/// logging infrastructure failing must never fail the host application.
#[derive(Debug)]
pub struct FileSink {
    filter: Filter,
    pattern: Pattern,
    path: PathBuf,
    writer: Option<Mutex<LineWriter<File>>>,
}

impl FileSink {
    /// Opens (and truncates) `path`; an unopenable path yields a silent
    /// sink, never an error and never substitute output elsewhere.
    #[must_use]
    pub fn create(filter: Filter, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let writer = File::create(&path)
            .ok()
            .map(|file| Mutex::new(LineWriter::new(file)));
        Self {
            filter,
            pattern: Pattern::default(),
            path,
            writer,
        }
    }

    /// Overrides the line layout.
    #[must_use]
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Whether the backing file was opened; a closed sink discards records.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// The path this sink writes to, opened or not.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A poisoned lock still guards a usable writer; complete lines only
    /// ever go through `writeln!`.
    fn lock(writer: &Mutex<LineWriter<File>>) -> MutexGuard<'_, LineWriter<File>> {
        writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for FileSink {
    fn filter(&self) -> &Filter {
        &self.filter
    }

    fn log(&self, metadata: &Metadata, message: &str) {
        let Some(writer) = &self.writer else { return };
        let line = self.pattern.render(metadata, message);
        let _ = writeln!(Self::lock(writer), "{line}");
    }

    fn flush(&self) -> io::Result<()> {
        match &self.writer {
            Some(writer) => Self::lock(writer).flush(),
            None => Ok(()),
        }
    }
}
