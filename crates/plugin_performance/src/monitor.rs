//! Process-visible CPU and memory usage, read through `sysinfo`.

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Point-in-time host resource usage, as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageSample {
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// Samples CPU and memory utilization.
///
/// The inner [`System`] lives for the monitor's lifetime: CPU usage is a
/// delta between two refreshes, so keeping the state across the broadcast
/// interval yields usage over that interval instead of a cold-start zero.
pub struct UsageMonitor {
    system: System,
}

impl UsageMonitor {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Self { system }
    }

    /// Refreshes the underlying counters and returns the current usage.
    ///
    /// May block briefly on the OS sampling call.
    pub fn sample(&mut self) -> UsageSample {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpu_percent = self.system.global_cpu_usage().clamp(0.0, 100.0);

        let total = self.system.total_memory();
        let memory_percent = if total == 0 {
            0.0
        } else {
            let used = total.saturating_sub(self.system.available_memory());
            (used as f32 / total as f32 * 100.0).clamp(0.0, 100.0)
        };

        UsageSample {
            cpu_percent,
            memory_percent,
        }
    }
}

impl Default for UsageMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_percent_range() {
        let mut monitor = UsageMonitor::new();
        // Two samples so the CPU reading is a real delta at least once.
        monitor.sample();
        let sample = monitor.sample();
        assert!((0.0..=100.0).contains(&sample.cpu_percent));
        assert!((0.0..=100.0).contains(&sample.memory_percent));
    }

    #[test]
    fn memory_is_nonzero_on_a_real_host() {
        let mut monitor = UsageMonitor::new();
        let sample = monitor.sample();
        assert!(sample.memory_percent > 0.0);
    }
}
