//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the supply API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login and seller registration
//! - [`seller`] - Seller directory snapshot (`GET /api/v0.1/user`)
//! - [`rate`] - Current rate and rate updates
//! - [`supply`] - Supply entries, dashboard pages and billing ranges
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v0.1/login
//! Content-Type: application/json
//!
//! {
//!   "PhoneNumber": 9999999999,
//!   "password": "secret"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;
pub mod rate;
pub mod seller;
pub mod supply;

pub use auth::*;
pub use rate::*;
pub use seller::*;
pub use supply::*;
