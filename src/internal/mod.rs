//! logpat's own diagnostics, written to stderr so they never mix with entries
//! on stdout.
//!
//! Messages carry a short scope (`CONFIG`, `READER`, ...) as a `tracing` field.
//! Events emitted before [`init_with_config`] are dropped.

use crate::config::Config;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Overrides `general.level` when set.
pub const ENV_FILTER: &str = "LOGPAT_LOG";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the stderr subscriber. Only the first call has an effect.
pub fn init_with_config(config: &Config) {
    let mut first = false;
    INITIALIZED.get_or_init(|| {
        first = true;
        let filter = EnvFilter::try_from_env(ENV_FILTER)
            .or_else(|_| EnvFilter::try_new(&config.general.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        // a host application may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
    if first {
        debug("INTERNAL", &format!("Log level: {}", config.general.level));
    }
}

pub fn trace(scope: &str, msg: &str) {
    tracing::trace!(scope, "{msg}");
}

pub fn debug(scope: &str, msg: &str) {
    tracing::debug!(scope, "{msg}");
}

pub fn info(scope: &str, msg: &str) {
    tracing::info!(scope, "{msg}");
}

pub fn warn(scope: &str, msg: &str) {
    tracing::warn!(scope, "{msg}");
}

pub fn error(scope: &str, msg: &str) {
    tracing::error!(scope, "{msg}");
}
