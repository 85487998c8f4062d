use crate::config::SilenceConfig;
use crate::energy::EnergyAnalyzer;
use crate::error::SilenceError;
use crate::tracker::{SilenceInterval, SilenceTracker, TrackerState};

/// One-call-per-frame front end over the analyzer and the tracker.
///
/// The threshold comparison lives here, on the caller's side of the
/// tracker: a frame is silent when its energy is at or below the
/// configured threshold (`<=`, so a frame exactly at the threshold
/// counts as silent). The tracker itself never sees the threshold.
pub struct SilenceDetector {
    analyzer: EnergyAnalyzer,
    tracker: SilenceTracker,
    config: SilenceConfig,
}

impl SilenceDetector {
    pub fn new(config: SilenceConfig) -> Self {
        Self {
            analyzer: EnergyAnalyzer::new(),
            tracker: SilenceTracker::new(),
            config,
        }
    }

    /// Classify one decoded frame and advance the interval tracker.
    pub fn process_frame(
        &mut self,
        samples: &[i16],
        timestamp_secs: f64,
    ) -> Result<Option<SilenceInterval>, SilenceError> {
        let energy = self.analyzer.mean_square(samples)?;
        let is_silent = energy <= self.config.energy_threshold;
        self.tracker.observe(is_silent, timestamp_secs)
    }

    /// Flush a trailing open run at end of stream. `end_secs` comes from
    /// stream-duration metadata; see [`SilenceTracker::finalize`].
    pub fn finish(&mut self, end_secs: f64) -> Option<SilenceInterval> {
        self.tracker.finalize(end_secs)
    }

    pub fn current_state(&self) -> TrackerState {
        self.tracker.current_state()
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loud_frame() -> Vec<i16> {
        vec![i16::MAX; 64]
    }

    fn quiet_frame() -> Vec<i16> {
        vec![0i16; 64]
    }

    #[test]
    fn test_quiet_then_loud_emits_one_interval() {
        let mut detector = SilenceDetector::new(SilenceConfig::default());
        assert_eq!(detector.process_frame(&quiet_frame(), 0.0).unwrap(), None);
        assert_eq!(detector.process_frame(&quiet_frame(), 0.5).unwrap(), None);

        let interval = detector.process_frame(&loud_frame(), 1.0).unwrap();
        assert_eq!(
            interval,
            Some(SilenceInterval {
                start_secs: 0.0,
                end_secs: 1.0,
            })
        );
    }

    #[test]
    fn test_frame_exactly_at_threshold_is_silent() {
        // Constant half-scale samples give mean-square energy of exactly 0.25.
        let mut detector = SilenceDetector::new(SilenceConfig::new(0.25));
        let half_scale = vec![16384i16; 64];
        detector.process_frame(&half_scale, 0.0).unwrap();
        assert_eq!(
            detector.current_state(),
            TrackerState::InSilence { start_secs: 0.0 }
        );
    }

    #[test]
    fn test_empty_frame_error_propagates() {
        let mut detector = SilenceDetector::new(SilenceConfig::default());
        assert_eq!(
            detector.process_frame(&[], 0.0),
            Err(SilenceError::EmptyFrame)
        );
    }

    #[test]
    fn test_finish_flushes_open_run() {
        let mut detector = SilenceDetector::new(SilenceConfig::default());
        detector.process_frame(&quiet_frame(), 2.0).unwrap();
        assert_eq!(
            detector.finish(3.5),
            Some(SilenceInterval {
                start_secs: 2.0,
                end_secs: 3.5,
            })
        );
        assert_eq!(detector.finish(3.5), None);
    }
}
