use serde::{Deserialize, Serialize};

use crate::error::SilenceError;

/// A completed silent span, measured in stream seconds as the half-open
/// range `[start_secs, end_secs)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilenceInterval {
    pub start_secs: f64,
    pub end_secs: f64,
}

/// Tracker state. `InSilence` carries the only value that survives across
/// frames: the timestamp of the first frame of the currently open run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    Idle,
    InSilence { start_secs: f64 },
}

/// Two-state machine that folds a stream of per-frame silent/non-silent
/// classifications into merged silence intervals.
///
/// At most one interval is open at a time; an interval is emitted on the
/// first non-silent frame after a silent run, bounded by that frame's
/// timestamp. Frames must arrive in presentation order.
pub struct SilenceTracker {
    state: TrackerState,
    last_timestamp_secs: Option<f64>,
}

impl SilenceTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            last_timestamp_secs: None,
        }
    }

    /// Feed one frame's classification. Returns a completed interval only
    /// on the silent-to-non-silent edge.
    ///
    /// Timestamps must be non-decreasing across calls; a violation aborts
    /// the scan rather than producing a corrupted interval.
    pub fn observe(
        &mut self,
        is_silent: bool,
        timestamp_secs: f64,
    ) -> Result<Option<SilenceInterval>, SilenceError> {
        if let Some(previous) = self.last_timestamp_secs {
            if timestamp_secs < previous {
                return Err(SilenceError::OutOfOrder {
                    previous,
                    observed: timestamp_secs,
                });
            }
        }
        self.last_timestamp_secs = Some(timestamp_secs);

        let emitted = match (self.state, is_silent) {
            (TrackerState::Idle, true) => {
                self.state = TrackerState::InSilence {
                    start_secs: timestamp_secs,
                };
                None
            }
            (TrackerState::Idle, false) => None,
            (TrackerState::InSilence { .. }, true) => None,
            (TrackerState::InSilence { start_secs }, false) => {
                self.state = TrackerState::Idle;
                Some(SilenceInterval {
                    start_secs,
                    end_secs: timestamp_secs,
                })
            }
        };

        Ok(emitted)
    }

    /// Close and flush a trailing open run at end of stream.
    ///
    /// `end_secs` comes from stream-duration metadata, not from a frame
    /// timestamp, so the boundary is extrapolated rather than measured.
    /// Call exactly once after the last `observe`.
    pub fn finalize(&mut self, end_secs: f64) -> Option<SilenceInterval> {
        match self.state {
            TrackerState::InSilence { start_secs } => {
                self.state = TrackerState::Idle;
                Some(SilenceInterval {
                    start_secs,
                    end_secs,
                })
            }
            TrackerState::Idle => None,
        }
    }

    pub fn current_state(&self) -> TrackerState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::Idle;
        self.last_timestamp_secs = None;
    }
}

impl Default for SilenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
