//! # Supply API Client Module
//!
//! HTTP gateway for the dairy supply REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── routes.rs   - Endpoint paths
//! ├── client.rs   - ApiClient, session attachment and response mapping
//! ├── auth.rs     - Login and registration
//! ├── rate.rs     - Current rate and rate updates
//! ├── users.rs    - Seller list
//! └── supply.rs   - Supply entries, ranges, completion, deletion
//! ```
//!
//! No retries, no de-duplication: each call is one request, and each screen
//! issues its own.

pub mod auth;
pub mod client;
pub mod rate;
pub mod routes;
pub mod supply;
pub mod users;

pub use client::ApiClient;

#[cfg(test)]
mod tests;
