use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SilenceError {
    #[error("Cannot compute energy of an empty frame")]
    EmptyFrame,

    #[error("Out-of-order frame: timestamp {observed}s after {previous}s")]
    OutOfOrder { previous: f64, observed: f64 },
}
