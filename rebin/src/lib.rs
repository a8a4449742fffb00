// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! This crate rebins piecewise-constant histograms.
//!
//! The input is a partition of a domain into consecutive intervals, given by
//! its breakpoints, with one weight per interval. The output is a fixed
//! number of equal-width bins, each holding the mass which the input placed
//! within it. Every input interval spreads its weight across the bins it
//! overlaps in proportion to the overlap, so the total mass is conserved.
//!
//! Breakpoints and output bins share the same units. Unless a fixed range is
//! configured, the output bins span the input partition from its first to its
//! last breakpoint.
//!
//! ```
//! // two intervals of mass 3 and 5 onto two bins over [0, 1]
//! let densities = rebin::rebin(2, &[0.0, 0.5, 1.0], &[3.0, 5.0]).unwrap();
//! assert_eq!(densities, vec![6.0, 10.0]);
//! ```
//!
//! For more control, such as a fixed output range or density-valued input
//! weights, configure a [`Rebinner`] with its [`Builder`].

mod bin;
mod config;
mod error;
mod histogram;
mod interval;
mod partition;
mod rebinner;

pub use bin::Bin;
pub use config::{Builder, Config, Strategy, Weighting};
pub use error::Error;
pub use histogram::{Histogram, Iter};
pub use interval::{overlap, Interval};
pub use partition::{Partition, WeightedPartition};
pub use rebinner::Rebinner;

/// Rebin `totals`, the mass in each interval between consecutive `breaks`,
/// onto `bins` equal-width bins spanning `breaks[0]..=breaks[last]`, and
/// return the average density in each bin.
///
/// Fails before doing any work if `bins` is zero, if there are fewer than
/// two breakpoints, if a breakpoint decreases or is not finite, if the number
/// of totals is not one less than the number of breakpoints, or if the
/// breakpoints span a width that is zero, overflows, or is too small to
/// divide into `bins` distinct bins.
pub fn rebin(bins: usize, breaks: &[f64], totals: &[f64]) -> Result<Vec<f64>, Error> {
    let rebinner = Rebinner::new(bins)?;
    let input = WeightedPartition::new(breaks, totals)?;

    Ok(rebinner.rebin(&input)?.into_densities())
}
