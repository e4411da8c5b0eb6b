//! The record produced for each accepted line.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Fields extracted from one log line.
///
/// Every field except `line` may be left unset by a pattern; unset strings are
/// empty and an unset pid is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Raw source text, without the line terminator.
    #[serde(skip)]
    pub line: String,
    pub pid: u32,
    pub process: String,
    pub user: String,
    pub group: String,
    pub level: String,
    pub message: String,
    pub words: Vec<String>,
    pub host: String,
    pub when: Option<DateTime<FixedOffset>>,
}

impl Entry {
    /// The `index`th word captured by `%w`, 0-based.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}
