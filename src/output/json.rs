//! JSON lines: one serialized [`Entry`] object per line, raw source text omitted.

use super::Output;
use crate::entry::Entry;
use crate::error::Result;
use std::io::Write;

#[derive(Debug)]
pub struct JsonWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonWriter<W> {
    #[must_use]
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Output for JsonWriter<W> {
    fn write(&mut self, entry: &Entry) -> Result<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        self.sink.write_all(&line)?;
        self.sink.flush()?;
        Ok(())
    }
}
