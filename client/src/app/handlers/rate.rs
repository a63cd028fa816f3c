//! # Rate Handlers

use shared::UpdateRateRequest;

use crate::app::context::AppContext;
use crate::app::events::ScreenEvent;
use crate::app::state::FormStatus;
use crate::core::error::{AppError, Result};
use crate::utils::validation::parse_number;

/// Handle the update button on the rate form.
///
/// A blank special-rate field leaves the special rate unchanged on the server.
pub(crate) fn handle_rate_update(ctx: &AppContext) {
    let prepared = {
        let state = ctx.state.read();
        build_update(
            state.rate.current.as_ref().map(|r| r.id.clone()),
            &state.rate.rate_input,
            &state.rate.special_rate_input,
        )
    };

    let (id, request) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            ctx.state.write().rate.status = FormStatus::Failed(e.user_message());
            return;
        }
    };

    ctx.state.write().rate.status = FormStatus::Pending("Updating rate...".to_string());

    let api = ctx.api.clone();
    ctx.spawn_for_screen("update_rate", async move {
        ScreenEvent::RateUpdated(api.update_rate(&id, request).await)
    });
}

fn build_update(id: Option<String>, rate: &str, special_rate: &str) -> Result<(String, UpdateRateRequest)> {
    let id = id.ok_or_else(|| AppError::Validation("Rates have not loaded yet".to_string()))?;
    let rate = parse_number::<f64>(rate, "Rate")?;
    let special_rate = if special_rate.trim().is_empty() {
        None
    } else {
        Some(parse_number::<f64>(special_rate, "Special rate")?)
    };
    Ok((id, UpdateRateRequest { rate, special_rate }))
}
