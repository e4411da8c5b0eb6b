//! Utility functions for the CLI.

use crate::config::Config;
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Pattern, template and filter after applying flags over preset over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pattern: String,
    pub template: String,
    pub filter: String,
    pub json: bool,
}

impl Settings {
    /// # Errors
    /// `PresetNotFound` when `preset` names no configured preset.
    pub fn resolve(
        config: &Config,
        preset: Option<&str>,
        pattern: Option<&str>,
        template: Option<&str>,
        json: bool,
    ) -> Result<Self> {
        let mut settings = Self {
            pattern: config.reader.pattern.clone(),
            template: config.writer.template.clone(),
            filter: config.reader.filter.clone(),
            json: json || config.writer.json,
        };
        if let Some(name) = preset {
            let preset = config.preset(name)?;
            settings.pattern.clone_from(&preset.read);
            if let Some(ref write) = preset.write {
                settings.template.clone_from(write);
            }
            if let Some(ref filter) = preset.filter {
                settings.filter.clone_from(filter);
            }
        }
        if let Some(pattern) = pattern {
            settings.pattern = pattern.to_string();
        }
        if let Some(template) = template {
            settings.template = template.to_string();
        }
        Ok(settings)
    }
}

/// Expands a leading `~` to the user's home directory.
#[must_use]
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
}

/// Buffered FILE, or stdin for `None` and `-`.
///
/// # Errors
/// I/O error opening the file.
pub fn open_input(file: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let file = File::open(expand_path(path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
