//! Logging for cmdsh
//!
//! Two separate channels:
//! - diagnostics go through `tracing`, filtered by [`init_tracing`] and
//!   written to stderr; quiet unless a level is requested;
//! - user-visible failures are appended to a plain-text [`ErrorLog`], one
//!   line per failure, for the user to review after the session.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
pub fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;
    Ok(())
}

/// Append-only plain-text log of failures.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. The file is created on first use.
    pub fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn appends_lines() {
        let dir = tempdir().unwrap();
        let log = ErrorLog::new(dir.path().join("cli_log.txt"));
        log.append("first").unwrap();
        log.append("second").unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn unwritable_location_is_an_error_not_a_panic() {
        let dir = tempdir().unwrap();
        let log = ErrorLog::new(dir.path().join("missing").join("log.txt"));
        assert!(log.append("x").is_err());
    }
}
