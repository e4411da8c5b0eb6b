//! Line-oriented entry reader.
//!
//! The reader pulls one line at a time from a [`BufRead`] source and runs the
//! compiled pattern on it. Empty, mismatched and filtered lines are skipped.
//! Any other failure (I/O, integer overflow) ends the stream: it is returned on
//! that call and on every later one.

mod filter;

pub use filter::Filter;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::internal;
use crate::pattern::Pattern;
use std::io::BufRead;

#[derive(Debug)]
enum State {
    Ready,
    Exhausted,
    Failed(Error),
}

/// Pulls entries out of a line source.
///
/// ```
/// use logpat::compile_reader;
///
/// let input = "1 a\n\nx b\n2 c\n";
/// let mut reader = compile_reader(input.as_bytes(), "%p %m", "").unwrap();
/// let pids: Vec<u32> = reader.read_all().unwrap().iter().map(|e| e.pid).collect();
/// assert_eq!(pids, [1, 2]);
/// ```
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    source: R,
    pattern: Pattern,
    filter: Filter,
    state: State,
    buf: Vec<u8>,
    lines_read: u64,
    lines_skipped: u64,
}

impl<R: BufRead> Reader<R> {
    #[must_use]
    pub fn new(source: R, pattern: Pattern) -> Self {
        Self {
            source,
            pattern,
            filter: Filter::default(),
            state: State::Ready,
            buf: Vec::new(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Replaces the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Lines pulled from the source so far, including skipped ones.
    #[must_use]
    pub const fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Empty, mismatched and filtered lines.
    #[must_use]
    pub const fn lines_skipped(&self) -> u64 {
        self.lines_skipped
    }

    /// Next accepted entry, or `None` once the source is exhausted.
    ///
    /// # Errors
    /// The first fatal failure, repeated on every later call.
    pub fn read(&mut self) -> Result<Option<Entry>> {
        loop {
            match &self.state {
                State::Ready => {}
                State::Exhausted => return Ok(None),
                State::Failed(e) => return Err(e.clone()),
            }

            let Some(line) = self.next_line().map_err(|e| self.fail(e))? else {
                internal::debug(
                    "READER",
                    &format!(
                        "exhausted after {} lines ({} skipped)",
                        self.lines_read, self.lines_skipped
                    ),
                );
                self.state = State::Exhausted;
                return Ok(None);
            };

            if line.is_empty() {
                self.lines_skipped += 1;
                continue;
            }

            match self.pattern.extract(&line) {
                Ok(mut entry) => {
                    if !self.filter.accepts(&entry) {
                        self.lines_skipped += 1;
                        continue;
                    }
                    entry.line = line;
                    return Ok(Some(entry));
                }
                Err(e) if e.is_mismatch() => {
                    internal::trace("READER", &format!("line {} skipped", self.lines_read));
                    self.lines_skipped += 1;
                }
                Err(e) => return Err(self.fail(e)),
            }
        }
    }

    /// Drains the source.
    ///
    /// # Errors
    /// The first fatal failure; entries read before it are discarded.
    pub fn read_all(&mut self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.read()? {
            entries.push(entry);
        }
        Ok(entries)
    }

    fn fail(&mut self, e: Error) -> Error {
        internal::warn("READER", &format!("line {}: {e}", self.lines_read));
        self.state = State::Failed(e.clone());
        e
    }

    /// Next raw line without its terminator, decoded lossily.
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.source.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Yields each failure once, then stops.
impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Failed(_)) {
            return None;
        }
        self.read().transpose()
    }
}

/// Compiles `pattern` and `filter` and binds them to `source`.
///
/// # Errors
/// `Syntax` when either does not compile.
pub fn compile_reader<R: BufRead>(source: R, pattern: &str, filter: &str) -> Result<Reader<R>> {
    let pattern = Pattern::compile(pattern)?;
    let filter = Filter::parse(filter)?;
    Ok(Reader::new(source, pattern).with_filter(filter))
}
