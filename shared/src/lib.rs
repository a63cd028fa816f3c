//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dairy client and the supply API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login and registration DTOs
//!   - **[`dto::seller`]**: Seller list and role DTOs
//!   - **[`dto::rate`]**: Rate snapshot and update DTOs
//!   - **[`dto::supply`]**: Supply entries, pages and billing ranges
//! - **[`utils`]**: Pure helpers shared by every screen
//!   - **[`utils::supply_amount`]**: Amount for a supply entry at a rate
//!   - **[`utils::SupplySummary`]**: Dashboard aggregation
//!
//! ## Wire Format
//!
//! The server speaks camelCase with a few legacy names (`_id`, `PhoneNumber`,
//! `createAt`). Rust fields stay snake_case and carry explicit `#[serde(rename)]`
//! attributes where the wire name differs.
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     phone_number: 9999999999,
//!     password: "secret".to_string(),
//! };
//!
//! let response: LoginResponse = reqwest::Client::new()
//!     .post("http://localhost:3000/api/v0.1/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
