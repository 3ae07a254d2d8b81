//! Log subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when a log file is configured.
//! Line mode logs to stderr, leaving stdout for JSON replies.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Mode};

/// Install the global subscriber. Returns `false` when logging stays off.
pub fn init(config: &AppConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&config.log_path, config.mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {path}"))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
        }
        (None, Mode::Lines) => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
        }
        (None, Mode::Tui) => return Ok(false),
    }
    Ok(true)
}
