//! # Event Handlers
//!
//! User action handlers organized by screen.

pub mod auth;
pub mod billing;
pub mod navigation;
pub mod rate;
pub mod sale;
