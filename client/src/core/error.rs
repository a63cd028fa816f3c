//! # Common Error Types
//!
//! Consolidated error handling for the dairy client.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure a screen can show.
//!
//! ## Error Categories
//!
//! - **MissingSession**: an authenticated call was attempted with no stored token.
//!   Recovered by sending the user back to the Login screen.
//! - **Transport**: the request never produced a response (DNS, refused, reset).
//!   Shown inline, never retried.
//! - **Api**: the server answered with a non-2xx status. Shown inline using the
//!   server's message when the body carries one.
//! - **Validation**: client-side checks on form input. Blocks submission.
//! - **Decode**: a 2xx response whose body did not match the expected shape.
//! - **Storage**: the persisted session token could not be read or written.
//! - **Config**: invalid configuration supplied at startup.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dairy_client::core::error::AppError;
//!
//! fn validate_quantity(quantity: f64) -> Result<f64, AppError> {
//!     if quantity <= 0.0 {
//!         return Err(AppError::Validation("Quantity must be positive".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `reqwest::Error` → `AppError::Decode` for body decode failures, `AppError::Transport` otherwise
//! - `serde_json::Error` → `AppError::Decode`
//! - `std::io::Error` → `AppError::Storage`

use shared::ErrorResponse;
use thiserror::Error;

/// Fallback text when the server gave no usable message
const GENERIC_API_MESSAGE: &str = "Something went wrong";

/// Application-wide error type.
///
/// Variants carry owned strings so results can travel inside [`crate::app::AppEvent`]
/// (which is `Clone`) from async tasks back to the owner loop.
///
/// # Example
///
/// ```rust
/// use dairy_client::core::error::AppError;
///
/// let err = AppError::Api { status: 401, body: r#"{"message":"Token expired"}"#.to_string() };
/// assert!(err.is_auth_failure());
/// assert_eq!(err.user_message(), "Token expired");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// No session token is stored but the endpoint requires one.
    #[error("No active session")]
    MissingSession,

    /// Network-level failure (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success HTTP response with the raw body.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Client-side input validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Successful response that could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Session token storage failure.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for 401/403 responses, which usually mean the token is no longer accepted.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::Api { status: 401 | 403, .. })
    }

    /// Text suitable for an inline error label or alert.
    ///
    /// For `Api` errors this is the server's `message`/`error` field when the body is
    /// JSON carrying one, otherwise a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingSession => "Please log in again".to_string(),
            AppError::Transport(cause) => format!("Network error: {}", cause),
            AppError::Api { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .and_then(|e| e.text().map(str::to_string))
                .unwrap_or_else(|| GENERIC_API_MESSAGE.to_string()),
            AppError::Validation(msg) => msg.clone(),
            AppError::Decode(_) => "Unexpected response from server".to_string(),
            AppError::Storage(_) => "Could not access the saved session".to_string(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = AppError::Api {
            status: 400,
            body: r#"{"message":"Seller already exists"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Seller already exists");

        let err = AppError::Api {
            status: 500,
            body: "<html>Internal Server Error</html>".to_string(),
        };
        assert_eq!(err.user_message(), GENERIC_API_MESSAGE);
    }

    #[test]
    fn test_auth_failure_statuses() {
        let unauthorized = AppError::Api { status: 401, body: String::new() };
        let forbidden = AppError::Api { status: 403, body: String::new() };
        let not_found = AppError::Api { status: 404, body: String::new() };
        assert!(unauthorized.is_auth_failure());
        assert!(forbidden.is_auth_failure());
        assert!(!not_found.is_auth_failure());
        assert!(!AppError::MissingSession.is_auth_failure());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Validation("All fields are required".to_string()).to_string(),
            "Validation error: All fields are required"
        );
        assert_eq!(AppError::MissingSession.to_string(), "No active session");
    }
}
