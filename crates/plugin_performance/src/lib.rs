//! # Performance Plugin
//!
//! Broadcasts a server health line (TPS, player count, CPU, RAM, MSPT) to
//! operators every few seconds, and spawns a cluster of TNT around a
//! sneaking operator who uses a blaze rod on a block. The trigger is
//! debounced per player so a held-down click does not flood the world.
//!
//! Both behaviors ride the host's single dispatch thread: the broadcast is a
//! self-re-scheduling one-shot task, the spawn is a synchronous interaction
//! handler. See [`PerformanceConfig`] for the tunables.

mod config;
mod interact;
mod monitor;
mod reporter;


pub use config::PerformanceConfig;
pub use monitor::{UsageMonitor, UsageSample};
pub use reporter::PerfSnapshot;

use async_trait::async_trait;
use basalt_api::{
    EventBus, LogLevel, PlayerId, Plugin, PluginError, ServerContext,
};
use dashmap::DashMap;
use reporter::Reporter;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Periodic performance reports plus the debounced TNT trigger.
pub struct PerformancePlugin {
    name: String,
    config: Arc<PerformanceConfig>,
    last_click: Arc<DashMap<PlayerId, Instant>>,
    reporter: Reporter,
}

impl PerformancePlugin {
    pub fn new() -> Self {
        Self::with_config(PerformanceConfig::default())
    }

    pub fn with_config(config: PerformanceConfig) -> Self {
        let config = Arc::new(config);
        Self {
            name: "performance_plugin".to_string(),
            reporter: Reporter::new(Arc::clone(&config)),
            last_click: Arc::new(DashMap::new()),
            config,
        }
    }
}

impl Default for PerformancePlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Plugin for PerformancePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn register_handlers(
        &mut self,
        events: Arc<dyn EventBus>,
        context: Arc<dyn ServerContext>,
    ) -> Result<(), PluginError> {
        let handler_context = Arc::clone(&context);
        let config = Arc::clone(&self.config);
        let last_click = Arc::clone(&self.last_click);
        events
            .on_player_interact(Box::new(move |event| {
                interact::handle_interact(event, &handler_context, &config, &last_click)
            }))
            .map_err(|e| PluginError::ExecutionError(e.to_string()))?;
        info!("📊 PerformancePlugin: interaction handler registered");
        Ok(())
    }

    async fn on_enable(&mut self, context: Arc<dyn ServerContext>) -> Result<(), PluginError> {
        context.log(
            LogLevel::Info,
            "📊 PerformancePlugin enabled: TNT trigger armed, status broadcast starting",
        );
        // A scheduler rejection is logged inside activate; the plugin stays
        // enabled either way.
        self.reporter.activate(&context);
        Ok(())
    }

    async fn on_disable(&mut self, context: Arc<dyn ServerContext>) -> Result<(), PluginError> {
        self.reporter.deactivate(&context);
        context.log(LogLevel::Info, "📊 PerformancePlugin disabled");
        Ok(())
    }
}
