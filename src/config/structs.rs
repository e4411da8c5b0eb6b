//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Diagnostic level for logpat's own messages (`tracing` filter syntax).
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Input side: how lines are parsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Entry pattern.
    pub pattern: String,
    /// Filter expression; empty accepts every entry.
    pub filter: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pattern: crate::DEFAULT_PATTERN.to_string(),
            filter: String::new(),
        }
    }
}

/// Output side: how entries are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Output template.
    pub template: String,
    /// Emit JSON lines instead of the template.
    pub json: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            template: crate::DEFAULT_TEMPLATE.to_string(),
            json: false,
        }
    }
}

/// Named pattern/template pair, e.g. one per log format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Entry pattern.
    pub read: String,
    /// Output template; the writer default when unset.
    pub write: Option<String>,
    /// Filter expression.
    pub filter: Option<String>,
    /// Shown by `logpat presets`.
    pub description: Option<String>,
}
