//! `logpat`: parse log lines with an entry pattern and rewrite them.
//!
//! Usage:
//!   logpat cat [-i PATTERN] [-o TEMPLATE] [-p PRESET] [--json] [FILE]
//!   logpat presets
//!   logpat check PATTERN

use clap::Parser;
use logpat::cli::{Cli, Command, cmd_cat, cmd_check, cmd_presets};
use logpat::config::Config;
use logpat::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Cat(ref args) => cmd_cat(args, &config),
        Command::Presets => cmd_presets(&config),
        Command::Check { ref pattern } => cmd_check(pattern),
    }
}
