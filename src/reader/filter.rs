//! Post-match predicates deciding whether an accepted entry is yielded.

use crate::entry::Entry;
use crate::error::{Error, Result};
use std::fmt;

type Predicate = dyn Fn(&Entry) -> bool + Send + Sync;

/// Accept-all unless built from a closure.
#[derive(Default)]
pub struct Filter {
    predicate: Option<Box<Predicate>>,
}

impl Filter {
    /// Only the empty expression is understood; it accepts every entry.
    ///
    /// # Errors
    /// `Syntax` for any non-empty expression.
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.trim().is_empty() {
            return Ok(Self::default());
        }
        Err(Error::syntax(format!("filter: unsupported expression {expr:?}")))
    }

    #[must_use]
    pub fn from_fn(f: impl Fn(&Entry) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Some(Box::new(f)),
        }
    }

    #[must_use]
    pub fn accepts(&self, entry: &Entry) -> bool {
        self.predicate.as_ref().is_none_or(|p| p(entry))
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .finish()
    }
}
