//! Closed intervals on the real line and the length of their intersection.

#[cfg(feature = "schemars")]
use schemars::JsonSchema;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A closed interval `[lo, hi]` of the real line.
///
/// Intervals are plain values. A zero-width interval (`lo == hi`) is valid.
/// Nothing checks that `lo <= hi`; operations on a reversed interval return
/// whatever the arithmetic produces.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Returns the lower bound.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the width of the interval.
    pub fn len(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns true if the interval has zero width.
    pub fn is_empty(&self) -> bool {
        self.hi == self.lo
    }

    /// Returns the length of the intersection of this interval with `other`,
    /// or zero if they are disjoint or only touch at an endpoint.
    ///
    /// With `self = [a, b]` and `other = [c, d]`, the intersection starts at
    /// `max(a, c)` and ends at `min(b, d)`. When `a < c` the start is `c` and
    /// the intervals are disjoint iff `b <= c`; otherwise the start is `a` and
    /// they are disjoint iff `d <= a`. Both branches collapse to the single
    /// clamped difference below.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> f64 {
        let start = self.lo.max(other.lo);
        let end = self.hi.min(other.hi);
        (end - start).max(0.0)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self::new(lo, hi)
    }
}

impl From<core::ops::Range<f64>> for Interval {
    fn from(range: core::ops::Range<f64>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Interval> for core::ops::RangeInclusive<f64> {
    fn from(interval: Interval) -> Self {
        interval.lo..=interval.hi
    }
}

/// Returns the length of the overlap of two intervals, zero if disjoint.
///
/// ```
/// assert_eq!(rebin::overlap((0.0, 2.0), (1.0, 3.0)), 1.0);
/// assert_eq!(rebin::overlap((0.0, 1.0), (1.0, 2.0)), 0.0);
/// ```
pub fn overlap(a: impl Into<Interval>, b: impl Into<Interval>) -> f64 {
    a.into().overlap(&b.into())
}
