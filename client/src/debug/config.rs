//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "dairy_client=info,warn";

/// File name prefix for the rotated log, e.g. `dairy-client.log.2025-01-05`
pub const LOG_FILE_PREFIX: &str = "dairy-client.log";

/// Logging system configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log level filter (e.g., "dairy_client=debug,info")
    pub log_level: String,
    /// Directory for daily-rotated log files; `None` logs to stderr only
    pub log_dir: Option<PathBuf>,
    /// ANSI colours on the stderr layer
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: lookup("DAIRY_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            ansi: lookup("NO_COLOR").is_none(),
        }
    }

    /// Full path of today's log file prefix, when file logging is on
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_PREFIX))
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
