use std::fmt;

/// A stream instant decomposed into whole minutes and remaining seconds.
///
/// Start and end instants of an interval must each be decomposed from
/// their own seconds value; the remainder is always relative to the same
/// instant's minute count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSec {
    pub minutes: u64,
    pub seconds: f64,
}

impl MinSec {
    pub fn from_secs(total_secs: f64) -> Self {
        let minutes = (total_secs / 60.0).floor() as u64;
        Self {
            minutes,
            seconds: total_secs - minutes as f64 * 60.0,
        }
    }
}

impl fmt::Display for MinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m{}s", self.minutes, self.seconds)
    }
}
