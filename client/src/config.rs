//! Client configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `API_BASE_URL` | `http://127.0.0.1:3000` |
//! | `DAIRY_SESSION_FILE` | `<home>/.dairy-client/session.json` |
//! | `DAIRY_REQUEST_TIMEOUT_SECS` | unset (transport default) |
//! | `DAIRY_AUTH_FAILURE_THRESHOLD` | `2` |

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_AUTH_FAILURE_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the supply API, without trailing slash
    pub api_base_url: String,
    /// Where the session token is persisted
    pub session_file: PathBuf,
    /// Per-request timeout; `None` leaves the transport default in place
    pub request_timeout: Option<Duration>,
    /// Consecutive 401/403 responses before the session is dropped
    pub auth_failure_threshold: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: default_session_file(),
            request_timeout: None,
            auth_failure_threshold: DEFAULT_AUTH_FAILURE_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let session_file = lookup("DAIRY_SESSION_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        let request_timeout = lookup("DAIRY_REQUEST_TIMEOUT_SECS").and_then(|v| match v.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                tracing::warn!(value = %v, "Ignoring invalid DAIRY_REQUEST_TIMEOUT_SECS");
                None
            }
        });

        let auth_failure_threshold = lookup("DAIRY_AUTH_FAILURE_THRESHOLD")
            .and_then(|v| match v.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    tracing::warn!(value = %v, "Ignoring invalid DAIRY_AUTH_FAILURE_THRESHOLD");
                    None
                }
            })
            .unwrap_or(defaults.auth_failure_threshold);

        Self {
            api_base_url,
            session_file,
            request_timeout,
            auth_failure_threshold,
        }
    }
}

fn default_session_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dairy-client")
        .join("session.json")
}
