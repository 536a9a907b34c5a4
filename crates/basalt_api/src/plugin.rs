//! # Plugin Lifecycle Interface
//!
//! The capability set a plugin implements and registers imperatively with the
//! host. There is no base class and no dynamic loading: the host constructs
//! the plugin value, drives the lifecycle below, and drops it at shutdown.
//!
//! ## Lifecycle
//!
//! 1. **Registration** - `register_handlers()` subscribes event handlers
//! 2. **Enable** - `on_enable()` once the server is accepting events
//! 3. **Operation** - handlers and scheduled tasks run on the dispatch thread
//! 4. **Disable** - `on_disable()` at shutdown, for cancelling pending work

use crate::context::ServerContext;
use crate::events::EventBus;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors a plugin can report from lifecycle hooks.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin could not initialize
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),
    /// Plugin failed during handler registration or execution
    #[error("Plugin execution error: {0}")]
    ExecutionError(String),
    /// Plugin runtime error outside the other categories
    #[error("Plugin runtime error: {0}")]
    Runtime(String),
}

/// A Basalt plugin.
///
/// Lifecycle hooks are async so plugins may await host services during
/// startup and shutdown; the per-event and per-task work they install stays
/// synchronous, matching the host's dispatch model.
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    /// Plugin name, as shown in the server log.
    fn name(&self) -> &str;

    /// Plugin version string.
    fn version(&self) -> &str;

    /// Subscribes this plugin's event handlers on the bus.
    ///
    /// Called exactly once, before `on_enable`. Handlers typically capture
    /// clones of the context and of the plugin's shared state.
    async fn register_handlers(
        &mut self,
        events: Arc<dyn EventBus>,
        context: Arc<dyn ServerContext>,
    ) -> Result<(), PluginError>;

    /// Called when the host enables the plugin.
    async fn on_enable(&mut self, _context: Arc<dyn ServerContext>) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called when the host disables the plugin, before it is dropped.
    async fn on_disable(&mut self, _context: Arc<dyn ServerContext>) -> Result<(), PluginError> {
        Ok(())
    }
}
