//! # Server Context Interface
//!
//! The bridge between plugin code and the host server. A context is handed
//! to every lifecycle hook and captured by event handlers that need host
//! services later.
//!
//! ## Core Services
//!
//! - **Scheduling** - one-shot delayed tasks on the dispatch thread
//! - **Performance Counters** - measured TPS and MSPT
//! - **Players** - snapshot of connected sessions
//! - **Commands** - console-origin command dispatch
//! - **Logging** - lines routed into the server log

use crate::player::Player;
use crate::scheduler::Scheduler;
use std::fmt::Debug;
use std::sync::Arc;

// ============================================================================
// Server Context Interface
// ============================================================================

/// Host services available to a plugin.
///
/// Every method is synchronous and non-blocking; the host guarantees all
/// calls happen on its single dispatch thread, so values read here are
/// consistent within one callback invocation.
pub trait ServerContext: Send + Sync + Debug {
    /// Returns the host task scheduler.
    fn scheduler(&self) -> Arc<dyn Scheduler>;

    /// Measured ticks per second over the host's sampling window.
    ///
    /// At most [`TICKS_PER_SECOND`](crate::scheduler::TICKS_PER_SECOND);
    /// lower values mean the server is falling behind.
    fn current_tps(&self) -> f64;

    /// Measured milliseconds spent per tick over the same window.
    fn current_mspt(&self) -> f64;

    /// Snapshot of the currently connected players.
    fn online_players(&self) -> Vec<Arc<dyn Player>>;

    /// Dispatches a command string with console origin.
    ///
    /// The command is executed immediately, before this call returns.
    fn dispatch_command(&self, command: &str) -> Result<(), ServerError>;

    /// Logs a message through the server's logging infrastructure.
    ///
    /// # Arguments
    ///
    /// * `level` - Severity level of the log message
    /// * `message` - The message to log
    fn log(&self, level: LogLevel, message: &str);
}

// ============================================================================
// Supporting Types
// ============================================================================

/// Log levels for messages routed through [`ServerContext::log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Critical errors that may affect server stability
    Error,
    /// Warning conditions that should be investigated
    Warn,
    /// General informational messages
    Info,
    /// Detailed information for debugging
    Debug,
    /// Very detailed trace information
    Trace,
}

/// Errors that can occur during server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The command string was rejected by the dispatcher.
    #[error("Command rejected: {0}")]
    Command(String),
    /// Internal server error (invalid state, resource exhaustion, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}
