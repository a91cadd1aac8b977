//! Ordering probabilities across three paired groups
//!
//! Replicate `i` of every group is compared with replicate `i` of the
//! others, never with an independent resample. Replicates containing a tie
//! belong to no strict ordering.

use conjugate_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A strict total order of three groups, highest first
///
/// Entries are zero-based group indices; `GroupOrdering([1, 0, 2])` reads
/// "group 2 > group 1 > group 3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupOrdering(pub [usize; 3]);

impl GroupOrdering {
    /// The six orderings, lexicographic by group index
    pub const ALL: [GroupOrdering; 6] = [
        GroupOrdering([0, 1, 2]),
        GroupOrdering([0, 2, 1]),
        GroupOrdering([1, 0, 2]),
        GroupOrdering([1, 2, 0]),
        GroupOrdering([2, 0, 1]),
        GroupOrdering([2, 1, 0]),
    ];

    /// Strict ordering of one replicate, `None` on a tie or NaN
    pub fn of(values: [f64; 3]) -> Option<Self> {
        let [a, b, c] = values;
        if values.iter().any(|v| v.is_nan()) || a == b || b == c || a == c {
            return None;
        }
        let mut order = [0, 1, 2];
        order.sort_by(|&i, &j| values[j].total_cmp(&values[i]));
        Some(Self(order))
    }

    /// Group with the largest value
    pub fn highest(&self) -> usize {
        self.0[0]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|o| o == self).unwrap_or(0)
    }
}

impl fmt::Display for GroupOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} > {} > {}", a + 1, b + 1, c + 1)
    }
}

/// Empirical probabilities of the six strict orderings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingProbabilities {
    /// Indexed like [`GroupOrdering::ALL`]
    pub probabilities: [f64; 6],
    /// P(group 1 is the unique maximum)
    pub group1_max: f64,
}

impl OrderingProbabilities {
    /// Tally orderings over paired replicate collections
    pub fn from_paired(groups: [&[f64]; 3]) -> Result<Self> {
        let n = groups[0].len();
        if groups.iter().any(|g| g.len() != n) {
            return Err(Error::InvalidSampleSize(format!(
                "paired collections differ in length: {}, {}, {}",
                groups[0].len(),
                groups[1].len(),
                groups[2].len()
            )));
        }
        if n == 0 {
            return Err(Error::InvalidSampleSize(
                "no replicates to compare".to_string(),
            ));
        }

        let mut counts = [0_usize; 6];
        let mut group1_max = 0_usize;
        for i in 0..n {
            let values = [groups[0][i], groups[1][i], groups[2][i]];
            if let Some(order) = GroupOrdering::of(values) {
                counts[order.position()] += 1;
            }
            if values[0] > values[1] && values[0] > values[2] {
                group1_max += 1;
            }
        }

        let total = n as f64;
        Ok(Self {
            probabilities: counts.map(|c| c as f64 / total),
            group1_max: group1_max as f64 / total,
        })
    }

    /// Probability of one ordering
    pub fn probability(&self, order: GroupOrdering) -> f64 {
        self.probabilities[order.position()]
    }

    /// Sum over all six orderings; below 1 only when replicates tie
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Orderings paired with their probabilities
    pub fn iter(&self) -> impl Iterator<Item = (GroupOrdering, f64)> + '_ {
        GroupOrdering::ALL
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }
}
