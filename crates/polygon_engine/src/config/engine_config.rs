//! Engine configuration types

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::time::{Ticks, DEFAULT_TICKS_PER_SECOND};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Simulation clock configuration
    pub simulation: SimulationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config for EngineConfig {}

impl EngineConfig {
    /// Tick converter for the configured simulation rate
    pub fn ticks(&self) -> Ticks {
        Ticks::new(self.simulation.ticks_per_second)
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Polygon Engine Application".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Simulation clock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// How many lifespan ticks make up one second
    pub ticks_per_second: u32,

    /// Stop the main loop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            max_frames: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
