use crate::constants::I16_FULL_SCALE;
use crate::error::SilenceError;

/// Computes per-frame loudness as normalized mean-square amplitude.
///
/// Interleaved multi-channel samples are treated as one flat sequence, so
/// channel balance does not affect the result.
pub struct EnergyAnalyzer;

impl EnergyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Mean of squared samples after normalizing each to [-1, 1].
    ///
    /// The result lies in [0, 1] for any valid i16 input. An empty frame
    /// has no defined energy and is rejected.
    pub fn mean_square(&self, samples: &[i16]) -> Result<f64, SilenceError> {
        if samples.is_empty() {
            return Err(SilenceError::EmptyFrame);
        }

        let sum_squares: f64 = samples
            .iter()
            .map(|&sample| {
                let s = sample as f64 / I16_FULL_SCALE;
                s * s
            })
            .sum();

        Ok(sum_squares / samples.len() as f64)
    }
}

impl Default for EnergyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
