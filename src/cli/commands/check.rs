//! `logpat check`.

use crate::pattern::Pattern;
use std::process::ExitCode;

/// Handles `logpat check <pattern>`: prints `ok` or the syntax error.
#[must_use]
pub fn cmd_check(pattern: &str) -> ExitCode {
    match Pattern::compile(pattern) {
        Ok(_) => {
            println!("ok: {pattern}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
