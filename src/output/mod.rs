//! Entry sinks. A sink renders one entry per line and flushes after each one so
//! downstream consumers see records as soon as they are read.

mod json;
mod text;

pub use json::JsonWriter;
pub use text::{Writer, compile_writer};

use crate::entry::Entry;

/// Destination for rendered entries.
pub trait Output {
    /// Writes one entry followed by a newline.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&mut self, entry: &Entry) -> Result<(), crate::Error>;
}
