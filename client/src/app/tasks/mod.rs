//! # Async Tasks
//!
//! Spawned network work and the registry that ties it to screen visits.
//!
//! Every fetch a screen starts is registered under that screen's [`Visit`]. When
//! navigation ends the visit, its outstanding tasks are aborted. Session-level work
//! (session check, login, session clear) is registered separately and never aborted.

pub mod fetch;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::app::state::Visit;

#[derive(Default)]
struct Registry {
    screen: Vec<(Visit, JoinHandle<()>)>,
    global: Vec<JoinHandle<()>>,
}

/// Handles of in-flight tasks. Clones share the same registry.
#[derive(Clone, Default)]
pub(crate) struct TaskRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl TaskRegistry {
    pub fn register_screen(&self, visit: Visit, handle: JoinHandle<()>) {
        self.inner.lock().screen.push((visit, handle));
    }

    pub fn register_global(&self, handle: JoinHandle<()>) {
        self.inner.lock().global.push(handle);
    }

    /// Abort every unfinished task started during `visit`
    pub fn abort_visit(&self, visit: Visit) -> usize {
        let mut registry = self.inner.lock();
        let mut aborted = 0;
        registry.screen.retain(|(owner, handle)| {
            if *owner != visit {
                return true;
            }
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
            false
        });
        aborted
    }

    /// True when no registered task is still running
    pub fn is_idle(&self) -> bool {
        let mut registry = self.inner.lock();
        registry.screen.retain(|(_, handle)| !handle.is_finished());
        registry.global.retain(|handle| !handle.is_finished());
        registry.screen.is_empty() && registry.global.is_empty()
    }
}
