use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and threshold knobs for the UI core. Defaults match the shipped page script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_interval_ms: u64,
    pub progress_ceiling: u8,
    pub message_step: u8,
    pub emphasis_ms: u64,
    pub min_query_chars: usize,
    pub copy_reset_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            progress_ceiling: 95,
            message_step: 15,
            emphasis_ms: 500,
            min_query_chars: 2,
            copy_reset_ms: 2_000,
            counter_duration_ms: 1_500,
            counter_frame_ms: 16,
        }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn emphasis_duration(&self) -> Duration {
        Duration::from_millis(self.emphasis_ms)
    }

    pub fn copy_reset_delay(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }

    pub fn counter_frame(&self) -> Duration {
        Duration::from_millis(self.counter_frame_ms)
    }
}
