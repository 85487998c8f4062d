pub mod config;
pub mod constants;
pub mod detector;
pub mod energy;
pub mod error;
pub mod timestamp;
pub mod tracker;

// Core exports - grouped and sorted alphabetically
pub use config::SilenceConfig;
pub use constants::{DEFAULT_ENERGY_THRESHOLD, I16_FULL_SCALE};
pub use detector::SilenceDetector;
pub use energy::EnergyAnalyzer;
pub use error::SilenceError;
pub use timestamp::MinSec;
pub use tracker::{SilenceInterval, SilenceTracker, TrackerState};
