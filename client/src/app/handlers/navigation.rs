//! # Navigation Handlers
//!
//! Screen changes with authentication guard and per-visit task cleanup.

use crate::app::context::AppContext;
use crate::app::state::Screen;
use crate::app::tasks::fetch;

/// Show `screen`, ending the current visit.
///
/// Protected screens redirect to Login while unauthenticated. Tasks started by the
/// previous visit are aborted and any of its results still queued are ignored.
pub(crate) fn navigate(ctx: &AppContext, screen: Screen) {
    let target = {
        let mut state = ctx.state.write();

        let target = if screen.requires_auth() && !state.is_authenticated() {
            tracing::info!(
                "Access denied: {} requires authentication, redirecting to Login",
                screen.title()
            );
            Screen::Login
        } else {
            screen
        };

        let previous = state.visit();
        let aborted = ctx.tasks.abort_visit(previous);
        if aborted > 0 {
            tracing::debug!(screen = ?previous.screen, aborted, "Cancelled tasks of previous screen");
        }

        state.current_screen = target;
        state.visit_id += 1;
        target
    };

    tracing::info!(screen = ?target, "Screen changed");
    on_enter(ctx, target);
}

/// Start the loads a screen shows on entry
pub(crate) fn on_enter(ctx: &AppContext, screen: Screen) {
    match screen {
        Screen::Dashboard => fetch::fetch_supply_page(ctx),
        Screen::Sale => {
            fetch::fetch_users(ctx);
            fetch::fetch_rate(ctx);
        }
        Screen::Forms => fetch::fetch_rate(ctx),
        Screen::Users => fetch::fetch_users(ctx),
        Screen::Billing | Screen::Login => {}
    }
}

/// Navigate to the next tab of the shell
pub(crate) fn next_tab(ctx: &AppContext) {
    let current = ctx.state.read().current_screen;
    navigate(ctx, step(current, 1));
}

/// Navigate to the previous tab of the shell
pub(crate) fn previous_tab(ctx: &AppContext) {
    let current = ctx.state.read().current_screen;
    navigate(ctx, step(current, Screen::tabs().len() - 1));
}

fn step(current: Screen, offset: usize) -> Screen {
    let tabs = Screen::tabs();
    match tabs.iter().position(|&s| s == current) {
        Some(idx) => tabs[(idx + offset) % tabs.len()],
        None => tabs[0],
    }
}
