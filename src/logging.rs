//! Structured logging setup for the CLI.

use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. With a log file configured,
/// events are appended there without ANSI colours; otherwise they go to stderr.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;

            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
    }

    Ok(())
}
