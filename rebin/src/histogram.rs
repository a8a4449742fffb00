#[cfg(feature = "schemars")]
use schemars::JsonSchema;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{Bin, Interval};

/// Returns the edge at `index` of `bins` equal-width bins spanning `range`.
/// The final edge is exactly the upper bound of the range.
#[inline]
pub(crate) fn edge(range: Interval, bins: usize, index: usize) -> f64 {
    if index >= bins {
        return range.hi();
    }
    range.lo() + range.len() * index as f64 / bins as f64
}

/// The result of a rebin: a fixed number of equal-width bins spanning a
/// range, holding the mass assigned to each.
///
/// Mass which could not be assigned to any bin, because it lay outside the
/// configured range or sat on a zero-width input interval, is tracked
/// separately so that `total() + excluded()` matches the input mass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Histogram {
    pub(crate) range: Interval,
    pub(crate) masses: Box<[f64]>,
    pub(crate) excluded: f64,
}

impl Histogram {
    pub(crate) fn new(range: Interval, bins: usize) -> Self {
        Self {
            range,
            masses: vec![0.0; bins].into(),
            excluded: 0.0,
        }
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        self.masses.len()
    }

    /// Returns the range spanned by the bins.
    pub fn range(&self) -> Interval {
        self.range
    }

    /// Returns the common width of every bin.
    pub fn bin_width(&self) -> f64 {
        self.range.len() / self.bins() as f64
    }

    /// Get a reference to the mass in each bin.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Returns the average density of each bin.
    pub fn densities(&self) -> Vec<f64> {
        self.iter().map(|bin| bin.density()).collect()
    }

    /// Consume the histogram and return the average density of each bin.
    pub fn into_densities(self) -> Vec<f64> {
        let mut densities = self.masses.into_vec();
        let bins = densities.len();
        for (index, value) in densities.iter_mut().enumerate() {
            let width = edge(self.range, bins, index + 1) - edge(self.range, bins, index);
            *value /= width;
        }
        densities
    }

    /// Returns the sum of the mass across all bins.
    pub fn total(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Returns the input mass that was not assigned to any bin.
    pub fn excluded(&self) -> f64 {
        self.excluded
    }

    /// Returns the bin at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Bin> {
        let mass = *self.masses.get(index)?;
        let bins = self.bins();

        Some(Bin {
            range: Interval::new(
                edge(self.range, bins, index),
                edge(self.range, bins, index + 1),
            ),
            mass,
        })
    }

    /// Returns an iterator across the bins.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            index: 0,
            histogram: self,
        }
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = Bin;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator across the histogram bins.
pub struct Iter<'a> {
    index: usize,
    histogram: &'a Histogram,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Bin;

    fn next(&mut self) -> Option<<Self as std::iter::Iterator>::Item> {
        let bin = self.histogram.get(self.index)?;
        self.index += 1;
        Some(bin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.histogram.bins().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
