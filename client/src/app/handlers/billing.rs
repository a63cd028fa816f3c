//! # Billing Handlers
//!
//! Range search, bulk completion and deletion of supply records.

use shared::SupplyRange;

use crate::app::context::AppContext;
use crate::app::events::ScreenEvent;
use crate::app::state::FormStatus;
use crate::app::tasks::fetch;
use crate::core::error::{AppError, Result};
use crate::utils::validation::{parse_date, validate_required};

/// Handle the search button
pub(crate) fn handle_billing_search(ctx: &AppContext) {
    let range = match form_range(ctx) {
        Ok(range) => range,
        Err(e) => {
            ctx.state.write().billing.status = FormStatus::Failed(e.user_message());
            return;
        }
    };
    ctx.state.write().billing.status = FormStatus::Idle;
    fetch::fetch_range(ctx, range);
}

/// Mark every record of the form's range as completed
pub(crate) fn handle_mark_completed(ctx: &AppContext) {
    let range = match form_range(ctx) {
        Ok(range) => range,
        Err(e) => {
            ctx.state.write().billing.status = FormStatus::Failed(e.user_message());
            return;
        }
    };

    {
        let mut state = ctx.state.write();
        state.billing.status = FormStatus::Pending("Marking as completed...".to_string());
        state.billing.last_range = Some(range.clone());
    }

    let api = ctx.api.clone();
    ctx.spawn_for_screen("mark_completed", async move {
        ScreenEvent::SupplyCompleted(api.mark_completed(&range).await)
    });
}

/// Delete one record from the current results
pub(crate) fn handle_delete_supply(ctx: &AppContext, id: String) {
    ctx.state.write().billing.status = FormStatus::Pending("Deleting...".to_string());

    let api = ctx.api.clone();
    ctx.spawn_for_screen("delete_supply", async move {
        let result = api.delete_supply(&id).await;
        ScreenEvent::SupplyDeleted { id, result }
    });
}

/// Re-run the last search, if there was one
pub(crate) fn refetch(ctx: &AppContext) {
    let last = ctx.state.read().billing.last_range.clone();
    if let Some(range) = last {
        fetch::fetch_range(ctx, range);
    }
}

fn form_range(ctx: &AppContext) -> Result<SupplyRange> {
    let state = ctx.state.read();
    let form = &state.billing;
    build_range(&form.seller_id, &form.from, &form.to)
}

fn build_range(seller_id: &str, from: &str, to: &str) -> Result<SupplyRange> {
    validate_required(&[seller_id, from, to], "Seller ID and both dates are required").into_result()?;
    let from = parse_date(from, "From")?;
    let to = parse_date(to, "To")?;
    if from > to {
        return Err(AppError::Validation("From date must not be after To date".to_string()));
    }
    Ok(SupplyRange {
        seller_id: seller_id.trim().to_string(),
        from,
        to,
    })
}
