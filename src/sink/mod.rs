//! Delivery destinations. Each sink owns its [`Filter`]; the registry
//! decides per record which sinks get it and hands every accepted sink the
//! same rendered message.

mod callback;
mod console;
mod file;
mod native;
mod null;

pub use callback::CallbackSink;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use native::NativeSink;
pub use null::NullSink;

use crate::filter::Filter;
use crate::record::Metadata;
use std::io;
use std::sync::Arc;

/// Shared handle under which sinks are registered. `unregister` matches on
/// handle identity, not sink contents.
pub type SinkHandle = Arc<dyn Sink>;

/// `Send + Sync` because records arrive from arbitrary application threads.
pub trait Sink: Send + Sync {
    /// The predicate the registry consults before delivering to this sink.
    fn filter(&self) -> &Filter;

    /// Delivers one accepted record. `message` is already rendered; text
    /// sinks expand their own pattern around it, the native sink hands it
    /// to the platform call as-is. Implementations must not panic: the
    /// registry provides no isolation between sinks.
    fn log(&self, metadata: &Metadata, message: &str);

    /// Buffered sinks override this to push tail data out.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
