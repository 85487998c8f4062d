use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENERGY_THRESHOLD;

/// Tuning surface for silence classification.
///
/// The threshold is compared against a frame's normalized mean-square
/// energy; frames at or below it count as silent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilenceConfig {
    pub energy_threshold: f64,
}

impl Default for SilenceConfig {
    fn default() -> Self {
        Self {
            energy_threshold: DEFAULT_ENERGY_THRESHOLD,
        }
    }
}

impl SilenceConfig {
    pub fn new(energy_threshold: f64) -> Self {
        Self { energy_threshold }
    }

    /// Mean-square energy of valid i16 input never leaves [0, 1], so a
    /// threshold outside that range is a configuration mistake.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.energy_threshold) {
            return Err(format!(
                "energy_threshold must be within [0, 1], got {}",
                self.energy_threshold
            ));
        }
        Ok(())
    }
}
