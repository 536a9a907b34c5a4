//! # Basalt Plugin API
//!
//! The contract between the Basalt game server and its plugins. This crate
//! carries no host implementation; it defines the value types events are made
//! of and the trait seams plugins are written against:
//!
//! - [`Plugin`] - the lifecycle a plugin implements and registers with the host
//! - [`ServerContext`] - host services (scheduler, counters, players, commands, log)
//! - [`EventBus`] / [`PlayerInteractEvent`] - synchronous event delivery
//! - [`Scheduler`] - one-shot delayed tasks, the single scheduling primitive
//! - [`Player`] - the host-owned view of a connected session
//!
//! ## Dispatch Model
//!
//! The host runs one synchronous dispatch thread. Event handlers and
//! scheduled tasks execute there sequentially, never concurrently; the
//! `Send + Sync` bounds exist so plugin state can be shared with the host's
//! loader, not because callbacks race.

pub mod color;
pub mod context;
pub mod events;
pub mod player;
pub mod plugin;
pub mod scheduler;
pub mod types;

pub use context::{LogLevel, ServerContext, ServerError};
pub use events::{EventBus, EventError, InteractHandler, PlayerInteractEvent};
pub use player::{Player, OP_PERMISSION};
pub use plugin::{Plugin, PluginError};
pub use scheduler::{Scheduler, SchedulerError, TaskFn, TaskId, TICKS_PER_SECOND};
pub use types::{BlockRef, ItemStack, PlayerId, Position};

/// Re-export for plugins implementing [`Plugin`] without naming the
/// dependency themselves.
pub use async_trait::async_trait;

/// Version of the plugin API contract.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
