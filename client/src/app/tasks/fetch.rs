//! # Fetch Tasks
//!
//! Read-only loads started when a screen is entered or refreshed.

use shared::SupplyRange;

use crate::app::context::AppContext;
use crate::app::events::ScreenEvent;

/// Load the current rate document (Sale and Forms)
pub(crate) fn fetch_rate(ctx: &AppContext) {
    {
        let mut state = ctx.state.write();
        state.rate.loading = true;
        state.rate.error = None;
    }

    let api = ctx.api.clone();
    ctx.spawn_for_screen("fetch_rate", async move {
        ScreenEvent::RateLoaded(api.get_rate().await)
    });
}

/// Load the seller list (Sale and Users). The directory write happens when the
/// result is handled, using the ticket taken here.
pub(crate) fn fetch_users(ctx: &AppContext) {
    let ticket = ctx.directory.begin_fetch();
    {
        let mut state = ctx.state.write();
        state.users.loading = true;
        state.users.error = None;
        state.sale.loading_sellers = true;
    }
    tracing::debug!(ticket = ticket.sequence(), "Fetching seller list");

    let api = ctx.api.clone();
    ctx.spawn_for_screen("fetch_users", async move {
        ScreenEvent::UsersLoaded {
            ticket,
            result: api.get_users().await,
        }
    });
}

/// Load the dashboard supply page
pub(crate) fn fetch_supply_page(ctx: &AppContext) {
    {
        let mut state = ctx.state.write();
        state.dashboard.loading = true;
        state.dashboard.error = None;
    }

    let api = ctx.api.clone();
    ctx.spawn_for_screen("fetch_supply_page", async move {
        ScreenEvent::DashboardLoaded(api.get_supply().await)
    });
}

/// Load one seller's statement for a date range
pub(crate) fn fetch_range(ctx: &AppContext, range: SupplyRange) {
    {
        let mut state = ctx.state.write();
        state.billing.loading = true;
        state.billing.last_range = Some(range.clone());
    }

    let api = ctx.api.clone();
    ctx.spawn_for_screen("fetch_supply_range", async move {
        ScreenEvent::BillingLoaded(api.get_supply_range(&range).await)
    });
}
