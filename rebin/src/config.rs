#[cfg(feature = "schemars")]
use schemars::JsonSchema;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::histogram::edge;
use crate::{Error, Interval, Rebinner};

/// How the weight attached to each input interval is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub enum Weighting {
    /// Each weight is the total mass contained in its interval.
    #[default]
    Total,
    /// Each weight is a density, so the mass of the interval is the weight
    /// multiplied by the interval width.
    Density,
}

/// The accumulation strategy used to distribute input intervals over the
/// output bins.
///
/// Both strategies visit the input intervals in order and add into each bin
/// in the same sequence, so they produce identical results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub enum Strategy {
    /// Only visit the bins an input interval can overlap. `O(n + m)`.
    #[default]
    Sweep,
    /// Test every input interval against every output bin. `O(n * m)`.
    Exhaustive,
}

/// The parameters that determine the output binning.
/// * `bins` - the number of equal-width output bins, at least 1.
/// * `range` - the domain covered by the output bins, in the same units as
///   the input breakpoints. When unset, the bins span the extent of each
///   input partition, which guarantees that all mass is conserved.
/// * `weighting` - whether the input weights are totals or densities.
/// * `strategy` - how the accumulation visits the output bins.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Config {
    bins: usize,
    range: Option<Interval>,
    weighting: Weighting,
    strategy: Strategy,
}

impl Config {
    /// Create a config with `bins` output bins and default settings.
    pub fn new(bins: usize) -> Result<Self, Error> {
        if bins == 0 {
            return Err(Error::NoBins);
        }

        Ok(Self {
            bins,
            range: None,
            weighting: Weighting::default(),
            strategy: Strategy::default(),
        })
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Returns the fixed output range, if one was configured.
    pub fn range(&self) -> Option<Interval> {
        self.range
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Checks that an output range has positive, finite width and that each of
/// `bins` equal-width bins across it has a positive width once rounded.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn validate_range(range: Interval, bins: usize) -> Result<Interval, Error> {
    let finite = range.lo().is_finite() && range.hi().is_finite() && range.len().is_finite();
    if !finite || !(range.lo() < range.hi()) {
        return Err(Error::InvalidRange {
            start: range.lo(),
            end: range.hi(),
        });
    }

    // adjacent edges can round to the same value when the bins are narrower
    // than the spacing of floats at this magnitude
    if (0..bins).any(|index| !(edge(range, bins, index + 1) > edge(range, bins, index))) {
        return Err(Error::BinsTooNarrow {
            bins,
            start: range.lo(),
            end: range.hi(),
        });
    }

    Ok(range)
}

/// A builder that can be used to construct a [`Rebinner`].
#[derive(Copy, Clone, Debug)]
pub struct Builder {
    bins: usize,
    range: Option<Interval>,
    weighting: Weighting,
    strategy: Strategy,
}

impl Builder {
    pub(crate) fn new(bins: usize) -> Self {
        Self {
            bins,
            range: None,
            weighting: Weighting::default(),
            strategy: Strategy::default(),
        }
    }

    /// Fix the output bins to span `[start, end]`. Input mass which lies
    /// outside this range is reported as excluded instead of being binned.
    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = Some(Interval::new(start, end));
        self
    }

    pub fn weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate the parameters and produce a rebinner.
    pub fn build(self) -> Result<Rebinner, Error> {
        let mut config = Config::new(self.bins)?;
        config.range = self
            .range
            .map(|range| validate_range(range, self.bins))
            .transpose()?;
        config.weighting = self.weighting;
        config.strategy = self.strategy;

        Ok(Rebinner::with_config(&config))
    }
}
