//! Validated partitions of a domain into consecutive intervals, optionally
//! paired with one weight per interval.

use crate::{Error, Interval};
use log::debug;

/// An ordered sequence of breakpoints `b0 <= b1 <= ... <= bm` which divides
/// the domain `[b0, bm]` into `m` consecutive intervals `[b(i), b(i+1)]`.
///
/// Repeated breakpoints are allowed and describe zero-width intervals. A
/// breakpoint which is smaller than its predecessor, or which is not finite,
/// is rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    breakpoints: Box<[f64]>,
}

impl Partition {
    pub fn new(breakpoints: impl Into<Vec<f64>>) -> Result<Self, Error> {
        let breakpoints: Vec<f64> = breakpoints.into();

        if breakpoints.len() < 2 {
            debug!("rejecting partition with {} breakpoints", breakpoints.len());
            return Err(Error::TooFewBreakpoints(breakpoints.len()));
        }

        if let Some((index, value)) = breakpoints
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            debug!("rejecting partition: breakpoint {} is {}", index, value);
            return Err(Error::NonFiniteBreakpoint { index, value });
        }

        for (index, pair) in breakpoints.windows(2).enumerate() {
            if pair[1] < pair[0] {
                debug!(
                    "rejecting partition: breakpoint {} ({}) follows {}",
                    index + 1,
                    pair[1],
                    pair[0]
                );
                return Err(Error::DecreasingBreakpoint {
                    index: index + 1,
                    value: pair[1],
                    previous: pair[0],
                });
            }
        }

        Ok(Self {
            breakpoints: breakpoints.into(),
        })
    }

    /// Returns the number of intervals, which is one less than the number of
    /// breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len() - 1
    }

    /// A partition always contains at least one interval.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Returns the interval from the first to the last breakpoint.
    pub fn extent(&self) -> Interval {
        Interval::new(self.breakpoints[0], self.breakpoints[self.len()])
    }

    /// Returns an iterator over the consecutive intervals of the partition.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = Interval> + '_ {
        self.breakpoints
            .windows(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
    }
}

/// A partition together with one weight for each of its intervals.
///
/// How a weight is interpreted, as the total mass in its interval or as a
/// density over it, is decided by the [`crate::Weighting`] of the rebinner
/// that consumes it.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedPartition {
    partition: Partition,
    totals: Box<[f64]>,
}

impl WeightedPartition {
    /// Validates the breakpoints and checks that there is exactly one total
    /// for each interval.
    pub fn new(breakpoints: impl Into<Vec<f64>>, totals: impl Into<Vec<f64>>) -> Result<Self, Error> {
        Self::with_partition(Partition::new(breakpoints)?, totals)
    }

    pub fn with_partition(partition: Partition, totals: impl Into<Vec<f64>>) -> Result<Self, Error> {
        let totals: Vec<f64> = totals.into();

        if totals.len() != partition.len() {
            debug!(
                "rejecting {} totals for a partition of {} intervals",
                totals.len(),
                partition.len()
            );
            return Err(Error::LengthMismatch {
                expected: partition.len(),
                got: totals.len(),
            });
        }

        Ok(Self {
            partition,
            totals: totals.into(),
        })
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Returns the sum of the weights.
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }

    /// Returns an iterator of each interval paired with its weight.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Interval, f64)> + '_ {
        self.partition.intervals().zip(self.totals.iter().copied())
    }
}
