//! # Application Events
//!
//! Event types for async task communication between background tasks and the owner loop.
//!
//! Session-level events apply whatever screen is showing. Everything else is a
//! [`ScreenEvent`] tagged with the [`Visit`] that started it, and is dropped if
//! that visit has ended by the time the event is handled.

use shared::{
    MessageResponse, NewSupply, Rate, SupplyKind, SupplyPage, SupplyRangeResponse, UsersResponse,
};

use crate::app::state::Visit;
use crate::core::error::Result;
use crate::services::directory::FetchTicket;

/// Async task results sent to the owner loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup session read finished
    SessionChecked { has_token: bool },
    /// Login request and token write finished
    LoginResult(Result<()>),
    /// Stored token removed after a logout
    SessionCleared(Result<()>),
    /// Result bound to one screen visit
    Screen { visit: Visit, event: ScreenEvent },
}

/// Results that only matter while the screen that asked for them is showing
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    RateLoaded(Result<Rate>),
    RateUpdated(Result<MessageResponse>),
    RegisterResult(Result<MessageResponse>),
    UsersLoaded {
        ticket: FetchTicket,
        result: Result<UsersResponse>,
    },
    SupplySubmitted {
        entry: NewSupply,
        kind: SupplyKind,
        result: Result<MessageResponse>,
    },
    DashboardLoaded(Result<SupplyPage>),
    BillingLoaded(Result<SupplyRangeResponse>),
    SupplyCompleted(Result<MessageResponse>),
    SupplyDeleted {
        id: String,
        result: Result<MessageResponse>,
    },
}

impl ScreenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenEvent::RateLoaded(_) => "RateLoaded",
            ScreenEvent::RateUpdated(_) => "RateUpdated",
            ScreenEvent::RegisterResult(_) => "RegisterResult",
            ScreenEvent::UsersLoaded { .. } => "UsersLoaded",
            ScreenEvent::SupplySubmitted { .. } => "SupplySubmitted",
            ScreenEvent::DashboardLoaded(_) => "DashboardLoaded",
            ScreenEvent::BillingLoaded(_) => "BillingLoaded",
            ScreenEvent::SupplyCompleted(_) => "SupplyCompleted",
            ScreenEvent::SupplyDeleted { .. } => "SupplyDeleted",
        }
    }

    /// Error carried by the event, if its call failed
    pub fn error(&self) -> Option<&crate::core::error::AppError> {
        match self {
            ScreenEvent::RateLoaded(r) => r.as_ref().err(),
            ScreenEvent::RateUpdated(r)
            | ScreenEvent::RegisterResult(r)
            | ScreenEvent::SupplyCompleted(r)
            | ScreenEvent::SupplySubmitted { result: r, .. }
            | ScreenEvent::SupplyDeleted { result: r, .. } => r.as_ref().err(),
            ScreenEvent::UsersLoaded { result, .. } => result.as_ref().err(),
            ScreenEvent::DashboardLoaded(r) => r.as_ref().err(),
            ScreenEvent::BillingLoaded(r) => r.as_ref().err(),
        }
    }
}
