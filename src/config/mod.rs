//! TOML configuration loading and `source = "..."` include resolution.

mod structs;

pub use structs::{GeneralConfig, PresetConfig, ReaderConfig, WriterConfig};

use crate::error::{Error, Result};
use crate::internal;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub reader: ReaderConfig,
    pub writer: WriterConfig,
    pub presets: HashMap<String, PresetConfig>,
}

/// Pulls `source = "..."` lines out of the raw TOML before deserialization.
/// Returns the include paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split('=')
                .nth(1)
                .map(|s| s.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config with all includes resolved.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(Error::Config(format!(
                "cyclic include: {}",
                canonical.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            if source_file.is_relative()
                && let Some(parent) = path.parent()
            {
                source_file = parent.join(source_file);
            }
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Adds presets from an included file; the including file keeps its own.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.presets {
            self.presets.entry(k).or_insert(v);
        }
    }

    /// `logpat/logpat.toml` under the platform config directory.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("logpat").join("logpat.toml"))
            .ok_or_else(|| Error::Config("config directory not found".to_string()))
    }

    /// # Errors
    /// `PresetNotFound` when no preset has that name.
    pub fn preset(&self, name: &str) -> Result<&PresetConfig> {
        self.presets
            .get(name)
            .ok_or_else(|| Error::PresetNotFound(name.to_string()))
    }

    /// Preset names in sorted order.
    #[must_use]
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
