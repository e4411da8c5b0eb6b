//! `logpat presets`.

use crate::config::Config;
use std::process::ExitCode;

/// Handles `logpat presets`.
#[must_use]
pub fn cmd_presets(config: &Config) -> ExitCode {
    let names = config.preset_names();
    if names.is_empty() {
        println!("No presets defined");
        return ExitCode::SUCCESS;
    }
    println!("Available presets:");
    for name in names {
        let Ok(preset) = config.preset(name) else {
            continue;
        };
        match preset.description {
            Some(ref desc) => println!("  {name:<16} {desc}"),
            None => println!("  {name:<16} {}", preset.read),
        }
    }
    ExitCode::SUCCESS
}
