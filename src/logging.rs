//! # Logging
//!
//! `tracing` subscriber setup. The interactive UI owns the terminal, so its
//! logs go to a file in the data directory; one-shot commands log to stderr.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! level.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines are written
#[derive(Debug, Clone)]
pub enum LogOutput {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber.
pub fn setup_logging(level: &str, output: &LogOutput) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {level}"))?,
    };

    match output {
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        LogOutput::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}

/// Get the XDG-compliant location of the log file
pub fn default_log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "newsdeck")
        .context("Failed to determine application data directory")?;

    Ok(proj_dirs.data_dir().join("newsdeck.log"))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
