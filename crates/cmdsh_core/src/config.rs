//! Startup settings for the shell.
//!
//! There is no configuration file; the CLI front end fills a [`ShellConfig`]
//! from its command-line flags and everything else keeps its default.

use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "CLI> ";
pub const DEFAULT_LOG_FILE: &str = "cli_log.txt";
pub const DEFAULT_BANNER: &str =
    "============ Welcome to the Custom CLI ================ \n Type 'help' for a list of commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub banner: String,
    /// Error log location; relative paths are anchored by [`ShellConfig::anchor_log_file`].
    pub log_file: PathBuf,
    pub color: bool,
    /// `tracing` filter directive for diagnostics.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// Resolve a relative log path against `base` (the starting directory),
    /// so later `cd` commands do not scatter log files around.
    pub fn anchor_log_file(&mut self, base: &Path) {
        if self.log_file.is_relative() {
            self.log_file = base.join(&self.log_file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_log_file_is_anchored() {
        let mut config = ShellConfig::default();
        config.anchor_log_file(Path::new("/work"));
        assert_eq!(config.log_file, Path::new("/work").join(DEFAULT_LOG_FILE));
    }

    #[test]
    fn absolute_log_file_is_kept() {
        let absolute = std::env::temp_dir().join("errors.txt");
        let mut config = ShellConfig { log_file: absolute.clone(), ..Default::default() };
        config.anchor_log_file(Path::new("/elsewhere"));
        assert_eq!(config.log_file, absolute);
    }
}
