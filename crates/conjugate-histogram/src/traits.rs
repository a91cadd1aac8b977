//! Core traits for frequency-table building

use crate::types::FrequencyTable;
use conjugate_core::Result;

/// Trait for building frequency tables from count data
pub trait FrequencyTableBuilder {
    /// Build a frequency table from the given sample
    fn build(&self, sample: &[u64]) -> Result<FrequencyTable>;
}
