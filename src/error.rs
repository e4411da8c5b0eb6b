//! Unified error type for compiling patterns and reading or writing entries.

use std::num::ParseIntError;
use std::sync::Arc;

/// Error type for logpat operations.
///
/// `Clone` because the reader keeps a copy of the first fatal failure and hands it
/// back on every later call.
#[derive(Debug, Clone)]
pub enum Error {
    /// Malformed template: unknown specifier, bad escape, unterminated group or argument.
    Syntax(String),
    /// The input does not have the compiled shape at the current position.
    Mismatch,
    /// I/O error from the underlying line source or sink.
    Io(Arc<std::io::Error>),
    /// A digit run that does not fit the target integer.
    Number(ParseIntError),
    /// Config file could not be located, read or parsed.
    Config(String),
    /// Preset not found.
    PresetNotFound(String),
}

impl Error {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    /// Mismatches are the only failures a reader recovers from.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(s) => write!(f, "syntax error: {s}"),
            Self::Mismatch => write!(f, "input does not match pattern"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Number(e) => write!(f, "invalid number: {e}"),
            Self::Config(s) => write!(f, "config error: {s}"),
            Self::PresetNotFound(name) => write!(f, "preset not found: {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e.as_ref()),
            Self::Number(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        Self::Number(e)
    }
}

/// Serialization only fails on I/O or on a broken `Serialize` impl.
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(Arc::new(e.into()))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(format!("parse error: {e}"))
    }
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
