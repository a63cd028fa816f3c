//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Screen-bound results are checked against the current visit first; a result
//! whose visit has ended is dropped without touching state. Every result that
//! survives is also shown to the router so auth failures can end the session.

use shared::{
    supply_amount, MessageResponse, Rate, SupplyKind, SupplyPage, SupplyRangeResponse,
    SupplySummary, UsersResponse,
};

use crate::app::events::{AppEvent, ScreenEvent};
use crate::app::handlers::{auth, billing, navigation};
use crate::app::state::{FormStatus, RecentSupply, Screen, Visit};
use crate::app::tasks::fetch;
use crate::app::App;
use crate::core::error::Result;
use crate::services::directory::FetchTicket;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per update and releases it before any follow-up
    /// navigation or fetch.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionChecked { has_token } => self.handle_session_checked(has_token),
            AppEvent::LoginResult(result) => auth::handle_login_result(&self.ctx, result),
            AppEvent::SessionCleared(result) => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "Failed to remove stored session");
                    self.state.write().login.status = FormStatus::Failed(e.user_message());
                }
            }
            AppEvent::Screen { visit, event } => self.handle_screen_event(visit, event),
        }
    }
}

impl App {
    fn handle_session_checked(&mut self, has_token: bool) {
        let authenticated = {
            let mut state = self.state.write();
            state.router.session_checked(has_token);
            state.is_authenticated()
        };
        let screen = if authenticated { Screen::Dashboard } else { Screen::Login };
        navigation::navigate(&self.ctx, screen);
    }

    fn handle_screen_event(&mut self, visit: Visit, event: ScreenEvent) {
        let current = self.state.read().visit();
        if visit != current {
            tracing::debug!(
                event = event.name(),
                from = ?visit.screen,
                current = ?current.screen,
                "Discarding result of a finished screen visit"
            );
            return;
        }

        if auth::observe_auth(&self.ctx, event.error()) {
            return;
        }

        match event {
            ScreenEvent::RateLoaded(result) => self.handle_rate_loaded(visit.screen, result),
            ScreenEvent::RateUpdated(result) => self.handle_rate_updated(result),
            ScreenEvent::RegisterResult(result) => self.handle_register_result(result),
            ScreenEvent::UsersLoaded { ticket, result } => {
                self.handle_users_loaded(visit.screen, ticket, result)
            }
            ScreenEvent::SupplySubmitted { entry, kind, result } => {
                self.handle_supply_submitted(entry, kind, result)
            }
            ScreenEvent::DashboardLoaded(result) => self.handle_dashboard_loaded(result),
            ScreenEvent::BillingLoaded(result) => self.handle_billing_loaded(result),
            ScreenEvent::SupplyCompleted(result) => {
                self.handle_billing_change(result, "Supplies marked as completed")
            }
            ScreenEvent::SupplyDeleted { id, result } => {
                tracing::info!(id = %id, ok = result.is_ok(), "Supply delete finished");
                self.handle_billing_change(result, "Supply deleted")
            }
        }
    }

    fn handle_rate_loaded(&mut self, screen: Screen, result: Result<Rate>) {
        let mut state = self.state.write();
        state.rate.loading = false;
        match result {
            Ok(rate) => {
                state.rate.error = None;
                state.rate.rate_input = rate.snapshot.rate.to_string();
                state.rate.special_rate_input = rate.snapshot.special_rate.to_string();
                state.sale.rates = Some(rate.snapshot);
                state.rate.current = Some(rate);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch rates");
                let message = format!("Failed to fetch rates: {}", e.user_message());
                if screen == Screen::Sale {
                    state.sale.status = FormStatus::Failed(message.clone());
                }
                state.rate.error = Some(message);
            }
        }
    }

    fn handle_rate_updated(&mut self, result: Result<MessageResponse>) {
        match result {
            Ok(response) => {
                tracing::info!("Rate updated");
                self.state.write().rate.status = FormStatus::Succeeded(
                    response.message.unwrap_or_else(|| "Rate updated successfully".to_string()),
                );
                fetch::fetch_rate(&self.ctx);
            }
            Err(e) => {
                self.state.write().rate.status =
                    FormStatus::Failed(format!("Failed to update rate: {}", e.user_message()));
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<MessageResponse>) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                tracing::info!("Seller registered");
                state.register = Default::default();
                state.register.status = FormStatus::Succeeded("Registered successfully!".to_string());
            }
            Err(e) => {
                state.register.status = FormStatus::Failed(e.user_message());
            }
        }
    }

    fn handle_users_loaded(&mut self, screen: Screen, ticket: FetchTicket, result: Result<UsersResponse>) {
        match result {
            Ok(response) => {
                let applied = self.ctx.directory.replace_with_ticket(ticket, response);
                let mut state = self.state.write();
                state.users.loading = false;
                state.sale.loading_sellers = false;
                if applied {
                    state.users.sellers = self.ctx.directory.get();
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch sellers");
                let mut state = self.state.write();
                state.users.loading = false;
                state.sale.loading_sellers = false;
                let message = e.user_message();
                if screen == Screen::Sale {
                    state.sale.status = FormStatus::Failed(message.clone());
                }
                state.users.error = Some(message);
            }
        }
    }

    fn handle_supply_submitted(
        &mut self,
        entry: shared::NewSupply,
        kind: SupplyKind,
        result: Result<MessageResponse>,
    ) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                let amount = state
                    .sale
                    .rates
                    .map(|rates| supply_amount(kind, entry.quantity, entry.fat_percent, &rates));
                tracing::info!(seller = entry.seller_numeric_id, kind = kind.title(), ?amount, "Supply submitted");
                state.sale.recent = Some(RecentSupply { entry, kind, amount });
                state.sale.status =
                    FormStatus::Succeeded(format!("{} supply submitted successfully!", kind.title()));
                state.sale.seller_id.clear();
                state.sale.quantity.clear();
                state.sale.fat.clear();
            }
            Err(e) => {
                state.sale.status = FormStatus::Failed(e.user_message());
            }
        }
    }

    fn handle_dashboard_loaded(&mut self, result: Result<SupplyPage>) {
        let mut state = self.state.write();
        state.dashboard.loading = false;
        match result {
            Ok(page) => {
                state.dashboard.summary = SupplySummary::from_records(&page.supplies);
                state.dashboard.page = Some(page);
                state.dashboard.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch supplies");
                state.dashboard.error = Some(e.user_message());
            }
        }
    }

    fn handle_billing_loaded(&mut self, result: Result<SupplyRangeResponse>) {
        let mut state = self.state.write();
        state.billing.loading = false;
        match result {
            Ok(response) => state.billing.results = Some(response),
            Err(e) => {
                state.billing.results = None;
                state.billing.status = FormStatus::Failed(e.user_message());
            }
        }
    }

    /// Completion and deletion both refresh the statement on success
    fn handle_billing_change(&mut self, result: Result<MessageResponse>, success: &str) {
        match result {
            Ok(_) => {
                self.state.write().billing.status = FormStatus::Succeeded(success.to_string());
                billing::refetch(&self.ctx);
            }
            Err(e) => {
                self.state.write().billing.status = FormStatus::Failed(e.user_message());
            }
        }
    }
}
