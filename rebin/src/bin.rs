//! Bins represent one equal-width slice of the output range and the mass
//! which was assigned to it.

use crate::Interval;

/// A single output bin: its bounds and the mass it received.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bin {
    pub(crate) range: Interval,
    pub(crate) mass: f64,
}

impl Bin {
    /// Returns the mass assigned to the bin.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the average density in the bin, its mass divided by its width.
    pub fn density(&self) -> f64 {
        self.mass / self.range.len()
    }

    /// Returns the range for the bin.
    pub fn range(&self) -> Interval {
        self.range
    }

    /// Returns the lower bound for the bin.
    pub fn lower(&self) -> f64 {
        self.range.lo()
    }

    /// Returns the upper bound for the bin.
    pub fn upper(&self) -> f64 {
        self.range.hi()
    }
}
