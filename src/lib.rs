//! `logpat` - Pattern-compiled reader and writer for heterogeneous log lines.
//!
//! A small pattern language describes where each field sits in a line:
//!
//! ```
//! use logpat::{Pattern, Template};
//!
//! let pattern = Pattern::compile("[%t] %h %n[%p]: %m").unwrap();
//! let entry = pattern
//!     .parse_line("[2024-01-02T03:04:05Z] web01.example.com nginx[88]: GET /")
//!     .unwrap();
//! assert_eq!(entry.host, "web01.example.com");
//!
//! let out = Template::compile("%t %h %n: %m").unwrap();
//! assert_eq!(
//!     out.render(&entry),
//!     "2024-01-02T03:04:05Z web01.example.com nginx: GET /"
//! );
//! ```
//!
//! [`Reader`] applies a pattern to every line of a stream and skips lines that
//! do not fit; [`Writer`] renders entries back out through a [`Template`].
//!
//! # Features
//!
//! - `cli` (default): the `logpat` binary

pub mod config;
pub mod entry;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod output;
pub mod pattern;
pub mod reader;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use entry::Entry;
pub use error::{Error, Result};
pub use fmt::Template;
pub use output::{JsonWriter, Output, Writer, compile_writer};
pub use pattern::{Host, HostPattern, Pattern, TimePattern, When};
pub use reader::{Filter, Reader, compile_reader};

/// Entry pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "[%t] [%h(%4:%p)]%b%u:%g:%n [%p:%l(INFO, WARNING)]:%b%m";

/// Output template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "%t %n[%p]: %m";
