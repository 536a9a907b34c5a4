//! # Task Scheduler Interface
//!
//! One-shot delayed task execution offered by the host. Delays are expressed
//! in server ticks; the scheduler runs every task on the single dispatch
//! thread, so scheduled callbacks observe the same single-threaded world as
//! event handlers.
//!
//! There is no repeating-timer primitive. Periodic work re-schedules itself
//! from inside its own callback, which keeps exactly one pending handle alive
//! per loop and makes cancellation a single `cancel_task` call.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Fixed host simulation rate, in ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;

/// Stable handle for a scheduled task, usable for cancellation until the
/// task has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Deferred work accepted by the scheduler. Runs once, on the dispatch
/// thread.
pub type TaskFn = Box<dyn FnOnce() + Send>;

/// Errors surfaced by scheduler operations.
///
/// `Unsupported` is the "host capability unavailable" case: stripped-down
/// host builds may compile out scheduling, and plugins are expected to treat
/// it as non-fatal.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The host build does not provide the named scheduling operation.
    #[error("Scheduler capability unavailable: {0}")]
    Unsupported(&'static str),
    /// No pending task exists under the given handle.
    #[error("No pending task with handle {0}")]
    UnknownTask(TaskId),
}

/// Host task scheduler.
pub trait Scheduler: Send + Sync + Debug {
    /// Schedules `task` to run once after `delay_ticks` server ticks.
    ///
    /// A delay of zero runs the task on the next dispatch pass. Returns the
    /// handle to cancel the task before it runs.
    fn run_task(&self, task: TaskFn, delay_ticks: u32) -> Result<TaskId, SchedulerError>;

    /// Cancels a pending task.
    ///
    /// Cancelling a handle whose task already ran reports
    /// [`SchedulerError::UnknownTask`].
    fn cancel_task(&self, task: TaskId) -> Result<(), SchedulerError>;
}
