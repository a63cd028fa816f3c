//! # Logging and Task Tracing
//!
//! - **[`logger`]**: `tracing` subscriber with a stderr layer and optional daily log file
//! - **[`config`]**: Logging configuration from `RUST_LOG`, `DAIRY_LOG_DIR` and `NO_COLOR`
//! - **[`task_tracker`]**: Spawned-task lifecycle logging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dairy_client::debug::{self, LogConfig};
//!
//! let _guard = debug::init_logger(&LogConfig::from_env());
//! tracing::info!(endpoint = "/api/v0.1/getRate", duration_ms = 42, "API call completed");
//! ```

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::LogConfig;
pub use logger::{init as init_logger, LoggerGuard};
pub use task_tracker::{active_task_count, spawn_tracked};
