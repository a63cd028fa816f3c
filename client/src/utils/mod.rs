//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form input checks (required fields, phone numbers, numbers, dates)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate calculations (supply amounts, dashboard summary)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
