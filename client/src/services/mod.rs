//! # Services Module
//!
//! Handles to everything outside the process.
//!
//! - **[`api`]**: HTTP gateway to the supply API (`ApiClient`)
//! - **[`session`]**: Persisted bearer token (`SessionStore`)
//! - **[`directory`]**: Last fetched seller list, shared across screens (`SellerDirectory`)
//!
//! All three are cheap to clone and safe to hand to spawned tasks.

pub mod api;
pub mod directory;
pub mod session;
