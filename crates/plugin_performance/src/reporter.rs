//! Periodic performance broadcast to operator players.
//!
//! The host scheduler only offers one-shot delayed tasks, so each report
//! ends by scheduling the next one. A schedule rejection is logged and the
//! loop simply stops; nothing propagates into the host.

use crate::config::PerformanceConfig;
use crate::monitor::UsageMonitor;
use basalt_api::{color, LogLevel, ServerContext, TaskId, OP_PERMISSION};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::error;

/// One report's worth of host and process metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfSnapshot {
    pub tps: f64,
    pub players: usize,
    pub mspt: f64,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

impl PerfSnapshot {
    /// Renders the chat line sent to operators.
    ///
    /// TPS, CPU and RAM carry one decimal, MSPT two; the line is green.
    pub fn status_line(&self) -> String {
        format!(
            "{}TPS:{:.1} Players:{} | CPU:{:.1}% RAM:{:.1}% MSPT:{:.2}ms",
            color::GREEN,
            self.tps,
            self.players,
            self.cpu_percent,
            self.memory_percent,
            self.mspt
        )
    }
}

/// Self-re-scheduling status broadcast.
///
/// Clones are cheap handles onto the same task slot and monitor, which is
/// what lets a scheduled callback re-arm the loop it belongs to.
#[derive(Clone)]
pub(crate) struct Reporter {
    config: Arc<PerformanceConfig>,
    monitor: Arc<Mutex<UsageMonitor>>,
    task: Arc<Mutex<Option<TaskId>>>,
}

impl Reporter {
    pub fn new(config: Arc<PerformanceConfig>) -> Self {
        Self {
            config,
            monitor: Arc::new(Mutex::new(UsageMonitor::new())),
            task: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedules the first report to run without delay.
    pub fn activate(&self, context: &Arc<dyn ServerContext>) {
        self.schedule(context, 0);
        if self.pending_task().is_some() {
            context.log(LogLevel::Info, "📊 PerformancePlugin: broadcast task scheduled");
        }
    }

    /// Cancels the pending report, if any. No pending task is a no-op.
    pub fn deactivate(&self, context: &Arc<dyn ServerContext>) {
        let Some(task) = self.task_slot().take() else {
            return;
        };
        if let Err(e) = context.scheduler().cancel_task(task) {
            error!("failed to cancel broadcast {task}: {e}");
        }
    }

    /// Handle of the currently pending report, if one is scheduled.
    pub fn pending_task(&self) -> Option<TaskId> {
        *self.task_slot()
    }

    /// Runs one report and arms the next.
    pub fn run(&self, context: &Arc<dyn ServerContext>) {
        let snapshot = self.collect(context.as_ref());
        deliver(context.as_ref(), &snapshot);
        self.schedule(context, self.config.report_delay_ticks());
    }

    fn collect(&self, context: &dyn ServerContext) -> PerfSnapshot {
        let usage = self
            .monitor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .sample();
        PerfSnapshot {
            tps: context.current_tps(),
            players: context.online_players().len(),
            mspt: context.current_mspt(),
            cpu_percent: usage.cpu_percent,
            memory_percent: usage.memory_percent,
        }
    }

    fn schedule(&self, context: &Arc<dyn ServerContext>, delay_ticks: u32) {
        let next = self.clone();
        let task_context = Arc::clone(context);
        let outcome = context
            .scheduler()
            .run_task(Box::new(move || next.run(&task_context)), delay_ticks);
        let mut slot = self.task_slot();
        match outcome {
            Ok(id) => *slot = Some(id),
            Err(e) => {
                *slot = None;
                error!("failed to schedule broadcast: {e}");
            }
        }
    }

    fn task_slot(&self) -> MutexGuard<'_, Option<TaskId>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sends the rendered status line to every operator currently online.
pub(crate) fn deliver(context: &dyn ServerContext, snapshot: &PerfSnapshot) {
    let line = snapshot.status_line();
    for player in context.online_players() {
        if player.has_permission(OP_PERMISSION) {
            player.send_message(&line);
        }
    }
}
