//! Shared handles passed to every handler and task.

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::{AppEvent, ScreenEvent};
use crate::app::state::AppState;
use crate::app::tasks::TaskRegistry;
use crate::core::service::ApiService;
use crate::debug::task_tracker::spawn_tracked;
use crate::services::directory::SellerDirectory;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub(crate) struct AppContext {
    pub state: Arc<RwLock<AppState>>,
    pub event_tx: Sender<AppEvent>,
    pub api: Arc<dyn ApiService>,
    pub session: SessionStore,
    pub directory: SellerDirectory,
    pub tasks: TaskRegistry,
}

impl AppContext {
    /// Run `work` on behalf of the current screen visit and deliver its result
    /// tagged with that visit.
    pub fn spawn_for_screen<F>(&self, name: &'static str, work: F)
    where
        F: Future<Output = ScreenEvent> + Send + 'static,
    {
        let visit = self.state.read().visit();
        let tx = self.event_tx.clone();
        let handle = spawn_tracked(name, async move {
            let event = work.await;
            if tx.send(AppEvent::Screen { visit, event }).await.is_err() {
                tracing::debug!(task = name, "Event channel closed, dropping result");
            }
        });
        self.tasks.register_screen(visit, handle);
    }

    /// Run session-level `work` that outlives navigation
    pub fn spawn_global<F>(&self, name: &'static str, work: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        let handle = spawn_tracked(name, async move {
            let event = work.await;
            if tx.send(event).await.is_err() {
                tracing::debug!(task = name, "Event channel closed, dropping result");
            }
        });
        self.tasks.register_global(handle);
    }
}
