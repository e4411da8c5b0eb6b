//! Rendering entries back to text through compiled output templates.

mod format;

pub use format::{FormatSegment, Placeholder, SENTINEL, Template};
