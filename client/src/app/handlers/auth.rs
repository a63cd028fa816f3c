//! # Authentication Handlers
//!
//! Handlers for login, seller registration and logout.

use shared::RegisterRequest;

use crate::app::context::AppContext;
use crate::app::events::{AppEvent, ScreenEvent};
use crate::app::handlers::navigation;
use crate::app::state::{FormStatus, Screen};
use crate::core::error::AppError;
use crate::utils::validation::{parse_number, validate_phone, validate_required};

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(ctx: &AppContext, phone: String, password: String) {
    let phone_number = match validate_required(&[&phone, &password], "Phone number and password are required")
        .into_result()
        .and_then(|_| parse_number::<u64>(&phone, "Phone number"))
    {
        Ok(number) => number,
        Err(e) => {
            ctx.state.write().login.status = FormStatus::Failed(e.user_message());
            return;
        }
    };

    {
        let mut state = ctx.state.write();
        state.login.phone.clear();
        state.login.password.clear();
        state.login.status = FormStatus::Pending("Logging in...".to_string());
    }

    let api = ctx.api.clone();
    let session = ctx.session.clone();
    ctx.spawn_global("login", async move {
        let result = match api.login(phone_number, password).await {
            Ok(response) => {
                // The token stays usable for this run even when it cannot be saved
                if let Err(e) = session.set(response.token).await {
                    tracing::warn!(error = %e, "Session will not survive a restart");
                }
                Ok(())
            }
            Err(e) => Err(e),
        };
        AppEvent::LoginResult(result)
    });
}

/// Apply a finished login
pub(crate) fn handle_login_result(ctx: &AppContext, result: crate::core::error::Result<()>) {
    match result {
        Ok(()) => {
            let entered = {
                let mut state = ctx.state.write();
                let entered = state.router.login_succeeded();
                state.login.status = if entered {
                    FormStatus::Succeeded("Login successful!".to_string())
                } else if state.is_authenticated() {
                    FormStatus::Succeeded("Already logged in".to_string())
                } else {
                    tracing::warn!(route = ?state.router.state(), "Login result arrived outside the login flow");
                    FormStatus::Failed("Login failed: session check still running".to_string())
                };
                entered
            };
            if entered {
                navigation::navigate(ctx, Screen::Dashboard);
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            ctx.state.write().login.status = FormStatus::Failed(format!("Login failed: {}", e.user_message()));
        }
    }
}

/// Handle register button click on the Forms screen
pub(crate) fn handle_register_click(ctx: &AppContext) {
    let request = {
        let state = ctx.state.read();
        let form = &state.register;
        RegisterRequest {
            seller_id: form.seller_id.trim().to_string(),
            name: form.name.trim().to_string(),
            phone_number: form.phone.clone(),
            role: form.role,
            password: form.password.clone(),
        }
    };

    let checked = validate_required(&[&request.name, &request.password], "Name and password are required.")
        .into_result()
        .and_then(|_| validate_phone(&request.phone_number).into_result());
    if let Err(e) = checked {
        ctx.state.write().register.status = FormStatus::Failed(e.user_message());
        return;
    }

    ctx.state.write().register.status = FormStatus::Pending("Registering...".to_string());

    let api = ctx.api.clone();
    ctx.spawn_for_screen("register_user", async move {
        ScreenEvent::RegisterResult(api.register_user(request).await)
    });
}

/// Handle logout button click
pub(crate) fn handle_logout(ctx: &AppContext) {
    let left = ctx.state.write().router.logout();
    if left {
        end_session(ctx);
    }
}

/// Tear down an authenticated session after the router has left `Authenticated`.
///
/// Clears the seller directory and every screen, shows Login, and removes the
/// stored token in the background.
pub(crate) fn end_session(ctx: &AppContext) {
    ctx.directory.clear();
    ctx.state.write().reset_screens();
    navigation::navigate(ctx, Screen::Login);

    let session = ctx.session.clone();
    ctx.spawn_global("clear_session", async move {
        AppEvent::SessionCleared(session.clear().await)
    });
}

/// React to the errors that end a session. Returns true when the session ended.
pub(crate) fn observe_auth(ctx: &AppContext, error: Option<&AppError>) -> bool {
    let ended = {
        let mut state = ctx.state.write();
        match error {
            Some(AppError::MissingSession) => {
                tracing::warn!("Session missing, returning to login");
                state.router.logout()
            }
            Some(e) if e.is_auth_failure() => state.router.record_auth_failure(),
            Some(_) => false,
            None => {
                state.router.record_success();
                false
            }
        }
    };

    if ended {
        ctx.state.write().login.status = FormStatus::Failed("Please log in again".to_string());
        end_session(ctx);
    }
    ended
}
