//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Dependency Injection
//!
//! Screens talk to the gateway through `Arc<dyn ApiService>`:
//!
//! ```rust,ignore
//! use dairy_client::core::service::ApiService;
//!
//! // In production: the HTTP gateway
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, session.clone())?);
//!
//! // In tests: a mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
