//! Simulation parameters
//!
//! Defaults reproduce the classic setup: a 100 x 95 grid at 70% vegetation,
//! 50 ms between frames and the final frame held for five seconds.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters supplied by an entry point before generation and propagation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Target fraction of flammable cells (0-1)
    pub density: f64,
    /// RNG seed for reproducible terrain. `None` uses the thread RNG.
    pub seed: Option<u64>,
    /// Pause after each rendered frame
    pub frame_delay: Duration,
    /// How long the final frame stays visible
    pub final_hold: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 100,
            height: 95,
            density: 0.7,
            seed: None,
            frame_delay: Duration::from_millis(50),
            final_hold: Duration::from_secs(5),
        }
    }
}

impl SimulationConfig {
    /// Config with the given grid and default pacing
    pub fn new(width: usize, height: usize, density: f64) -> Self {
        SimulationConfig {
            width,
            height,
            density,
            ..Default::default()
        }
    }

    /// Check the preconditions of terrain generation and fire propagation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero dimension, a density that is NaN or
    /// outside `[0, 1]`, or a grid whose cell count overflows `usize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange {
                value: self.density,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
