//! Shared constants for the silence detection pipeline

/// Full-scale magnitude of a signed 16-bit sample, used to normalize to [-1, 1]
pub const I16_FULL_SCALE: f64 = 32768.0;

/// Default mean-square energy threshold below which a frame counts as silent
pub const DEFAULT_ENERGY_THRESHOLD: f64 = 0.265;
