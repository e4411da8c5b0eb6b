//! Command-line interface for `logpat`.

pub mod commands;
pub mod util;

pub use commands::{cmd_cat, cmd_check, cmd_presets};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// logpat - Parse log lines with patterns and rewrite them.
#[derive(Debug, Parser)]
#[command(
    name = "logpat",
    version,
    about = "Parse log lines with patterns and rewrite them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read entries from FILE (or stdin) and write them out.
    Cat(CatArgs),
    /// List configured presets.
    Presets,
    /// Compile a pattern and report syntax errors.
    Check {
        /// Entry pattern
        pattern: String,
    },
}

#[derive(Debug, Args)]
pub struct CatArgs {
    /// Entry pattern (overrides preset and config)
    #[arg(short, long)]
    pub input: Option<String>,
    /// Output template (overrides preset and config)
    #[arg(short, long)]
    pub output: Option<String>,
    /// Named preset from the config file
    #[arg(short, long)]
    pub preset: Option<String>,
    /// Write JSON lines instead of the output template
    #[arg(long)]
    pub json: bool,
    /// Input file; stdin when omitted or "-"
    pub file: Option<PathBuf>,
}
