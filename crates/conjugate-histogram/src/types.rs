//! Core types for frequency-table representation

use serde::Serialize;
use std::fmt;

/// One spike of a count histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyBin {
    /// Observed count value
    pub value: u64,
    /// Number of observations equal to `value`
    pub count: usize,
    /// `count / total_count`
    pub relative: f64,
}

impl FrequencyBin {
    /// Create a new bin
    pub fn new(value: u64, count: usize, total_count: usize) -> Self {
        let relative = if total_count > 0 {
            count as f64 / total_count as f64
        } else {
            0.0
        };
        Self {
            value,
            count,
            relative,
        }
    }
}

impl fmt::Display for FrequencyBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: count={}, relative={:.3}",
            self.value, self.count, self.relative
        )
    }
}

/// Frequency table of non-negative integer data, ordered by value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    bins: Vec<FrequencyBin>,
    total_count: usize,
}

impl FrequencyTable {
    /// Create a new table from bins sorted by value
    pub fn new(bins: Vec<FrequencyBin>, total_count: usize) -> Self {
        Self { bins, total_count }
    }

    /// Get the bins
    pub fn bins(&self) -> &[FrequencyBin] {
        &self.bins
    }

    /// Get the number of distinct values
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of observations
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Distinct values in ascending order
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.bins.iter().map(|bin| bin.value)
    }

    /// Number of observations equal to `value`
    pub fn count_of(&self, value: u64) -> usize {
        self.find(value).map(|bin| bin.count).unwrap_or(0)
    }

    /// Relative frequency of `value`
    pub fn relative_frequency(&self, value: u64) -> f64 {
        self.find(value).map(|bin| bin.relative).unwrap_or(0.0)
    }

    /// Most frequent value (smallest on ties)
    pub fn mode(&self) -> Option<u64> {
        self.bins
            .iter()
            .fold(None::<&FrequencyBin>, |best, bin| match best {
                Some(b) if b.count >= bin.count => Some(b),
                _ => Some(bin),
            })
            .map(|bin| bin.value)
    }

    /// Largest observed value
    pub fn max_value(&self) -> Option<u64> {
        self.bins.last().map(|bin| bin.value)
    }

    fn find(&self, value: u64) -> Option<&FrequencyBin> {
        self.bins
            .binary_search_by_key(&value, |bin| bin.value)
            .ok()
            .map(|i| &self.bins[i])
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency table (n={}):", self.total_count)?;
        for bin in &self.bins {
            writeln!(f, "  {bin}")?;
        }
        Ok(())
    }
}
