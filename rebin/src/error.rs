use thiserror::Error;

/// Errors returned when the inputs to a rebin violate its contract.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("the number of output bins must be at least 1")]
    NoBins,
    #[error("a partition needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoint {index} ({value}) is not greater than or equal to its predecessor ({previous})")]
    DecreasingBreakpoint {
        index: usize,
        value: f64,
        previous: f64,
    },
    #[error("expected {expected} totals, one per interval, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("breakpoint {index} ({value}) is not finite")]
    NonFiniteBreakpoint { index: usize, value: f64 },
    #[error("invalid range: start ({start}) must be less than end ({end}) with a finite width")]
    InvalidRange { start: f64, end: f64 },
    #[error("{bins} bins are too narrow to resolve the range [{start}, {end}]")]
    BinsTooNarrow { bins: usize, start: f64, end: f64 },
}
