//! Plugin tunables. Defaults match the values the plugin has always shipped
//! with; hosts may override them from their plugin configuration store.

use basalt_api::TICKS_PER_SECOND;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Seconds between two status broadcasts.
    pub report_interval_secs: f64,
    /// Minimum gap, in milliseconds, between two accepted spawn triggers
    /// from the same player.
    pub click_debounce_ms: u64,
    /// Item that must be held for an interaction to trigger the spawn.
    pub reagent_item: String,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            report_interval_secs: 5.0,
            click_debounce_ms: 500,
            reagent_item: "minecraft:blaze_rod".to_string(),
        }
    }
}

impl PerformanceConfig {
    /// Broadcast interval converted to the scheduler's tick unit.
    pub fn report_delay_ticks(&self) -> u32 {
        (self.report_interval_secs * f64::from(TICKS_PER_SECOND)) as u32
    }

    /// Debounce window as a [`Duration`].
    pub fn click_debounce(&self) -> Duration {
        Duration::from_millis(self.click_debounce_ms)
    }
}
