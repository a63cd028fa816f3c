//! # Sale Handlers
//!
//! New supply entries at the normal or special rate.

use shared::{NewSupply, SupplyKind, SupplyStatus};

use crate::app::context::AppContext;
use crate::app::events::ScreenEvent;
use crate::app::state::FormStatus;
use crate::core::error::{AppError, Result};
use crate::utils::validation::{parse_number, validate_required};

/// Switch between the normal and special rate
pub(crate) fn handle_supply_kind_change(ctx: &AppContext, kind: SupplyKind) {
    ctx.state.write().sale.kind = kind;
}

/// Handle the submit button on the sale form
pub(crate) fn handle_sale_submit(ctx: &AppContext) {
    let (prepared, kind) = {
        let state = ctx.state.read();
        let form = &state.sale;
        (build_entry(&form.seller_id, &form.quantity, &form.fat), form.kind)
    };

    let entry = match prepared.and_then(|entry| check_known_seller(ctx, entry)) {
        Ok(entry) => entry,
        Err(e) => {
            ctx.state.write().sale.status = FormStatus::Failed(e.user_message());
            return;
        }
    };

    ctx.state.write().sale.status = FormStatus::Pending("Submitting...".to_string());

    let api = ctx.api.clone();
    ctx.spawn_for_screen("post_supply", async move {
        let result = match kind {
            SupplyKind::Normal => api.post_supply(entry).await,
            SupplyKind::Special => api.post_special_supply(entry).await,
        };
        ScreenEvent::SupplySubmitted { entry, kind, result }
    });
}

fn build_entry(seller_id: &str, quantity: &str, fat: &str) -> Result<NewSupply> {
    validate_required(&[seller_id, quantity, fat], "All fields are required").into_result()?;
    Ok(NewSupply {
        seller_numeric_id: parse_number(seller_id, "Seller ID")?,
        quantity: parse_number(quantity, "Quantity")?,
        fat_percent: parse_number(fat, "Fat")?,
        status: SupplyStatus::Pending,
    })
}

/// Reject seller ids the directory does not know, once it has been loaded
fn check_known_seller(ctx: &AppContext, entry: NewSupply) -> Result<NewSupply> {
    if ctx.directory.is_empty() || ctx.directory.contains(entry.seller_numeric_id) {
        return Ok(entry);
    }
    Err(AppError::Validation(format!(
        "Unknown seller ID {}",
        entry.seller_numeric_id
    )))
}
