//! # Dairy Client
//!
//! Client core for the dairy supply management service: an authenticated
//! session, an HTTP gateway to the supply API, a shared seller directory, and
//! the screen controllers that turn user actions into API calls.
//!
//! ## Architecture
//!
//! ### Async Event-Driven Design
//!
//! The application uses **async channels** for communication:
//! - Owner loop: Applies user actions and task results to state (single-threaded)
//! - Async tasks: Network requests and session storage (multi-threaded)
//!
//! Events flow from async tasks back to the owner via the `AppEvent` enum.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Locked briefly**: Never held across an `.await`
//!
//! ### Screens
//!
//! 1. **Login**: Phone number and password
//! 2. **Dashboard**: Supply list and totals
//! 3. **Billing**: Statement for a seller and date range, completion, deletion
//! 4. **Sale**: Normal and special supply entry
//! 5. **Forms**: Rate update and seller registration
//! 6. **Users**: Seller list
//!
//! Every screen except Login requires a session. Leaving a screen cancels the
//! requests it started, and results that arrive for a screen no longer shown
//! are dropped.
//!
//! ## Usage
//!
//! ### As a Binary
//!
//! ```bash
//! dairy-client login --phone 9999999999 --password secret
//! dairy-client dashboard
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use dairy_client::{App, AppConfig};
//!
//! # async fn demo() -> dairy_client::Result<()> {
//! let mut app = App::from_config(&AppConfig::from_env())?;
//! app.start();
//! app.settle().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables read at startup and
//! [`debug::config`] for logging.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, RouteState, Screen};
pub use config::AppConfig;
pub use core::{ApiService, AppError, Result};
