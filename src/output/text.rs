//! Template-rendered text lines.

use super::Output;
use crate::entry::Entry;
use crate::error::Result;
use crate::fmt::Template;
use std::io::Write;

/// Renders entries through a compiled [`Template`].
#[derive(Debug)]
pub struct Writer<W: Write> {
    sink: W,
    template: Template,
    buf: String,
}

impl<W: Write> Writer<W> {
    #[must_use]
    pub const fn new(sink: W, template: Template) -> Self {
        Self {
            sink,
            template,
            buf: String::new(),
        }
    }

    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Gives the sink back, e.g. to inspect an in-memory buffer.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Output for Writer<W> {
    fn write(&mut self, entry: &Entry) -> Result<()> {
        self.buf.clear();
        self.template.render_into(entry, &mut self.buf);
        self.buf.push('\n');
        self.sink.write_all(self.buf.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Compiles `template` and binds it to `sink`.
///
/// # Errors
/// `Syntax` when the template does not compile.
pub fn compile_writer<W: Write>(sink: W, template: &str) -> Result<Writer<W>> {
    Ok(Writer::new(sink, Template::compile(template)?))
}
