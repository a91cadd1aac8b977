//! Frequency table building strategies

use crate::traits::FrequencyTableBuilder;
use crate::types::{FrequencyBin, FrequencyTable};
use conjugate_core::{validation::check_data, Result};
use std::collections::BTreeMap;

/// One spike per distinct observed value
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactValues;

impl FrequencyTableBuilder for ExactValues {
    fn build(&self, sample: &[u64]) -> Result<FrequencyTable> {
        check_data("count sample", sample)?;

        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for &value in sample {
            *counts.entry(value).or_insert(0) += 1;
        }

        let total = sample.len();
        let bins = counts
            .into_iter()
            .map(|(value, count)| FrequencyBin::new(value, count, total))
            .collect();
        Ok(FrequencyTable::new(bins, total))
    }
}
