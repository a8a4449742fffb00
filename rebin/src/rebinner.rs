use crate::config::validate_range;
use crate::histogram::edge;
use crate::{Builder, Config, Error, Histogram, Interval, Strategy, WeightedPartition, Weighting};
use log::{debug, trace};

/// Redistributes a piecewise-constant weight function onto a fixed number of
/// equal-width bins while conserving its total mass.
///
/// Each input interval spreads its mass across the bins it overlaps, in
/// proportion to the fraction of the interval that falls within each bin.
/// Overlaps are measured on closed intervals, so an input interval which
/// only touches a bin at an edge contributes nothing to it.
#[derive(Clone, Debug)]
pub struct Rebinner {
    config: Config,
}

impl Rebinner {
    /// Construct a rebinner with `bins` output bins which span the extent of
    /// each input partition and treat the input weights as totals.
    pub fn new(bins: usize) -> Result<Self, Error> {
        let config = Config::new(bins)?;

        Ok(Self::with_config(&config))
    }

    /// Creates a new rebinner using a provided [`crate::Config`].
    pub fn with_config(config: &Config) -> Self {
        Self { config: *config }
    }

    /// Returns a [`Builder`] to configure a rebinner with `bins` output bins.
    pub fn builder(bins: usize) -> Builder {
        Builder::new(bins)
    }

    /// Returns the configuration of the rebinner.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Rebin the weighted partition.
    ///
    /// An error is returned only if no output range was configured and the
    /// extent of the input partition cannot hold the bins: it has zero or
    /// infinite width, or the bins would be narrower than float resolution.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn rebin(&self, input: &WeightedPartition) -> Result<Histogram, Error> {
        let range = match self.config.range() {
            Some(range) => range,
            None => validate_range(input.partition().extent(), self.config.bins()).map_err(|e| {
                debug!("cannot span the bins across the partition extent: {}", e);
                e
            })?,
        };

        let bins = self.config.bins();
        let mut histogram = Histogram::new(range, bins);
        let mut cursor = 0;

        for (interval, weight) in input.iter() {
            let width = interval.len();
            let mass = match self.config.weighting() {
                Weighting::Total => weight,
                Weighting::Density => weight * width,
            };

            if !(width > 0.0) {
                // a zero-width interval overlaps nothing
                histogram.excluded += mass;
                continue;
            }

            let inside = range.overlap(&interval);
            if inside < width {
                histogram.excluded += mass * ((width - inside) / width);
            }

            match self.config.strategy() {
                Strategy::Exhaustive => {
                    for index in 0..bins {
                        accumulate(&mut histogram, index, interval, mass);
                    }
                }
                Strategy::Sweep => {
                    // bins entirely left of this interval are also entirely
                    // left of every later one
                    while cursor + 1 < bins && edge(range, bins, cursor + 1) <= interval.lo() {
                        cursor += 1;
                    }

                    let mut index = cursor;
                    while index < bins && edge(range, bins, index) < interval.hi() {
                        accumulate(&mut histogram, index, interval, mass);
                        index += 1;
                    }
                }
            }
        }

        trace!(
            "rebinned {} intervals into {} bins over [{}, {}]",
            input.partition().len(),
            bins,
            range.lo(),
            range.hi()
        );

        if histogram.excluded != 0.0 {
            debug!("{} of the input mass fell outside the output bins", histogram.excluded);
        }

        Ok(histogram)
    }
}

/// Adds the share of `mass` which `interval` places into the bin at `index`.
/// The interval must have positive width.
#[inline]
fn accumulate(histogram: &mut Histogram, index: usize, interval: Interval, mass: f64) {
    let bins = histogram.bins();
    let bin = Interval::new(
        edge(histogram.range, bins, index),
        edge(histogram.range, bins, index + 1),
    );

    let overlap = bin.overlap(&interval);
    if overlap > 0.0 {
        histogram.masses[index] += mass * (overlap / interval.len());
    }
}
