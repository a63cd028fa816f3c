//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates screen controllers, async tasks and
//! application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Owner loop                             │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() / settle() - drain async results        │   │
//! │  │  - handle_event() - apply results to state           │   │
//! │  │  - handle_*() - user actions                         │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Router + one state struct per screen              │   │
//! │  │  - Lock held briefly, never across .await            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async tasks (Tokio)                            │
//! │  - tasks::fetch - rate, sellers, supply page, range         │
//! │  - handlers - login, register, submit, complete, delete     │
//! │  Each screen task is tagged with the visit that started it  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Main application orchestrator with event handling
//! - **[`AppState`]**: Shared application state (see [`state`] module)
//! - **[`Router`]**: Session state machine (see [`router`] module)
//! - **[`AppEvent`]**: Event enum for async task results (see [`events`] module)
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dairy_client::app::{App, Screen};
//! use dairy_client::config::AppConfig;
//!
//! # async fn demo() -> dairy_client::core::Result<()> {
//! let mut app = App::from_config(&AppConfig::from_env())?;
//! app.start();
//! app.settle().await;
//!
//! if app.state.read().is_authenticated() {
//!     app.navigate(Screen::Users);
//!     app.settle().await;
//!     println!("{} sellers", app.state.read().users.sellers.len());
//! }
//! # Ok(())
//! # }
//! ```

mod context;
mod event_handler;
mod handlers;
mod tasks;

pub mod events;
pub mod router;
pub mod state;

pub use events::{AppEvent, ScreenEvent};
pub use router::{RouteState, Router};
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver};
use parking_lot::RwLock;
use shared::SupplyKind;

use crate::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::directory::SellerDirectory;
use crate::services::session::{FileTokenStorage, SessionStore};
use crate::utils::validation::sanitize_phone;

use context::AppContext;
use event_handler::AppEventHandler;
use tasks::TaskRegistry;

/// How long [`App::settle`] waits for the next event before checking for idleness
const SETTLE_POLL: Duration = Duration::from_millis(25);

/// Main application orchestrator.
///
/// Owns the receiving end of the event channel. Handlers are synchronous: they
/// validate input, update state, and spawn the network work, whose results come
/// back through [`App::on_tick`] or [`App::settle`].
pub struct App {
    /// Shared application state.
    ///
    /// Use `read()` for rendering and `write()` to edit form fields. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    ctx: AppContext,
}

impl App {
    /// Create an application around explicit service handles.
    ///
    /// The router starts in `Checking`; call [`App::start`] to read the session.
    pub fn new(
        api: Arc<dyn ApiService>,
        session: SessionStore,
        directory: SellerDirectory,
        auth_failure_threshold: u32,
    ) -> Self {
        let state = Arc::new(RwLock::new(AppState::new(auth_failure_threshold)));
        let (event_tx, event_rx) = unbounded();

        let ctx = AppContext {
            state: state.clone(),
            event_tx,
            api,
            session,
            directory,
            tasks: TaskRegistry::default(),
        };

        tracing::info!(auth_failure_threshold, "App state initialized");

        App { state, event_rx, ctx }
    }

    /// Production wiring: file-backed session and HTTP gateway
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let session = SessionStore::new(Arc::new(FileTokenStorage::new(config.session_file.clone())));
        let api = ApiClient::new(config, session.clone())?;
        tracing::info!(
            api_base_url = %api.base_url(),
            session_file = %config.session_file.display(),
            "Using supply API"
        );
        Ok(Self::new(
            Arc::new(api),
            session,
            SellerDirectory::new(),
            config.auth_failure_threshold,
        ))
    }

    pub fn session(&self) -> &SessionStore {
        &self.ctx.session
    }

    pub fn directory(&self) -> &SellerDirectory {
        &self.ctx.directory
    }

    pub fn route(&self) -> RouteState {
        self.state.read().router.state()
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    /// Read the stored session and resolve the router
    pub fn start(&self) {
        let session = self.ctx.session.clone();
        self.ctx.spawn_global("check_session", async move {
            let has_token = session.get().await.is_some();
            AppEvent::SessionChecked { has_token }
        });
    }

    /// Process every event already queued, without waiting
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }
        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: Processed events from event channel");
        }
    }

    /// Process events until no task is running and nothing is queued.
    ///
    /// Follow-up work started while handling an event (refetches, navigation
    /// loads) is waited for as well.
    pub async fn settle(&mut self) {
        loop {
            match tokio::time::timeout(SETTLE_POLL, self.event_rx.recv()).await {
                Ok(Ok(event)) => self.handle_event(event),
                Ok(Err(_)) => break,
                Err(_) => {
                    if self.ctx.tasks.is_idle() && self.event_rx.is_empty() {
                        break;
                    }
                    tracing::trace!(
                        active_tasks = crate::debug::task_tracker::active_task_count(),
                        "Waiting for tasks to settle"
                    );
                }
            }
        }
    }

    /// Apply one async result to state
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Show a screen, cancelling whatever the previous one was loading
    pub fn navigate(&mut self, screen: Screen) {
        handlers::navigation::navigate(&self.ctx, screen);
    }

    /// Navigate to next tab of the shell
    pub fn next_tab(&mut self) {
        handlers::navigation::next_tab(&self.ctx);
    }

    /// Navigate to previous tab of the shell
    pub fn previous_tab(&mut self) {
        handlers::navigation::previous_tab(&self.ctx);
    }

    /// Re-run the current screen's loads within the same visit
    pub fn refresh(&mut self) {
        let screen = self.current_screen();
        handlers::navigation::on_enter(&self.ctx, screen);
    }

    pub fn handle_login_click(&mut self, phone: String, password: String) {
        handlers::auth::handle_login_click(&self.ctx, phone, password);
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(&self.ctx);
    }

    pub fn handle_register_click(&mut self) {
        handlers::auth::handle_register_click(&self.ctx);
    }

    /// Phone input on the register form keeps digits only, at most ten
    pub fn set_register_phone(&mut self, input: &str) {
        self.state.write().register.phone = sanitize_phone(input);
    }

    pub fn handle_rate_update(&mut self) {
        handlers::rate::handle_rate_update(&self.ctx);
    }

    pub fn handle_supply_kind_change(&mut self, kind: SupplyKind) {
        handlers::sale::handle_supply_kind_change(&self.ctx, kind);
    }

    pub fn handle_sale_submit(&mut self) {
        handlers::sale::handle_sale_submit(&self.ctx);
    }

    pub fn handle_billing_search(&mut self) {
        handlers::billing::handle_billing_search(&self.ctx);
    }

    pub fn handle_mark_completed(&mut self) {
        handlers::billing::handle_mark_completed(&self.ctx);
    }

    pub fn handle_delete_supply(&mut self, id: String) {
        handlers::billing::handle_delete_supply(&self.ctx, id);
    }
}

#[cfg(test)]
mod tests;
