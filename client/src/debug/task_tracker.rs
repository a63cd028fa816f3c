//! Async task lifecycle tracking for spotting hung requests

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Tasks spawned through [`spawn_tracked`] and not yet finished
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Monotonic id for log correlation
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Requests slower than this get a warning
const SLOW_TASK_SECS: u64 = 30;

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active count even when the task is aborted mid-flight
struct ActiveGuard;

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "fetch_rate", "login")
/// * `future` - The async task to execute
///
/// # Returns
///
/// JoinHandle that can be awaited, aborted or detached
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
    let guard = ActiveGuard;
    let start = Instant::now();

    tracing::debug!(task = %name, task_id, "Task spawned");

    tokio::spawn(async move {
        let _guard = guard;
        let result = future.await;
        let duration = start.elapsed();

        tracing::debug!(
            task = %name,
            task_id,
            duration_ms = duration.as_millis(),
            "Task completed"
        );

        if duration.as_secs() > SLOW_TASK_SECS {
            tracing::warn!(
                task = %name,
                task_id,
                duration_ms = duration.as_millis(),
                "Task took very long (potential hang)"
            );
        }

        result
    })
}
