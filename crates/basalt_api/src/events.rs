//! # Event Interface
//!
//! Events the host delivers to plugins and the bus plugins register their
//! handlers on. Delivery is synchronous: the host calls every registered
//! handler in registration order, on the dispatch thread, before the
//! triggering game action continues.
//!
//! Handlers observe events by reference and return `Result` so the host can
//! attribute failures to the plugin that produced them; a handler error never
//! unwinds into the host loop.

use crate::player::Player;
use crate::types::{BlockRef, ItemStack};
use std::sync::Arc;
use thiserror::Error;

/// A player performed a world interaction (used an item or clicked a block).
///
/// `block` is absent when the interaction had no target block (air clicks);
/// `item` is absent when the player's hand was empty.
#[derive(Debug, Clone)]
pub struct PlayerInteractEvent {
    /// The acting player.
    pub player: Arc<dyn Player>,
    /// Block the interaction targeted, if any.
    pub block: Option<BlockRef>,
    /// Item held during the interaction, if any.
    pub item: Option<ItemStack>,
}

/// Synchronous interaction callback registered by a plugin.
pub type InteractHandler =
    Box<dyn Fn(&PlayerInteractEvent) -> Result<(), EventError> + Send + Sync>;

/// Errors from event registration and handler execution.
#[derive(Debug, Error)]
pub enum EventError {
    /// The bus refused the handler (e.g. registration after shutdown).
    #[error("Handler registration failed: {0}")]
    Registration(String),
    /// A handler reported a failure while processing an event.
    #[error("Handler execution failed: {0}")]
    HandlerExecution(String),
}

/// Host event bus.
///
/// Registration is imperative: plugins subscribe during
/// [`register_handlers`](crate::plugin::Plugin::register_handlers) and the
/// host owns the subscription for the rest of the plugin's lifetime. There
/// is no unsubscribe; handlers simply stop being called once the plugin is
/// disabled.
pub trait EventBus: Send + Sync {
    /// Registers a handler for player world-interaction events.
    fn on_player_interact(&self, handler: InteractHandler) -> Result<(), EventError>;
}
