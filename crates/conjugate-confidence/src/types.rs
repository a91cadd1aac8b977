//! Common types for credible intervals

use conjugate_core::{validation::check_interval, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability levels `(lo, hi)` selecting the interval's empirical quantiles
///
/// Always satisfies `0 <= lo < hi <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct IntervalLevels {
    lo: f64,
    hi: f64,
}

impl IntervalLevels {
    /// Create interval levels
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        check_interval(lo, hi)?;
        Ok(Self { lo, hi })
    }

    /// Levels from a loosely-typed two-element sequence
    pub fn from_slice(levels: &[f64]) -> Result<Self> {
        match *levels {
            [lo, hi] => Self::new(lo, hi),
            _ => Err(Error::InvalidConfidenceInterval {
                lo: levels.first().copied().unwrap_or(f64::NAN),
                hi: f64::NAN,
            }),
        }
    }

    /// Central interval with the given coverage, e.g. `0.95` gives `(0.025, 0.975)`
    pub fn central(coverage: f64) -> Result<Self> {
        let tail = (1.0 - coverage) / 2.0;
        Self::new(tail, 1.0 - tail)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Probability mass between the levels
    pub fn coverage(&self) -> f64 {
        self.hi - self.lo
    }

    /// Both levels as a slice-friendly array
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Common levels
    pub const NINETY: Self = Self { lo: 0.05, hi: 0.95 };
    pub const NINETY_FIVE: Self = Self { lo: 0.025, hi: 0.975 };
    pub const NINETY_NINE: Self = Self { lo: 0.005, hi: 0.995 };
}

impl Default for IntervalLevels {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<(f64, f64)> for IntervalLevels {
    type Error = Error;

    fn try_from((lo, hi): (f64, f64)) -> Result<Self> {
        Self::new(lo, hi)
    }
}

impl From<IntervalLevels> for (f64, f64) {
    fn from(levels: IntervalLevels) -> Self {
        (levels.lo, levels.hi)
    }
}

impl fmt::Display for IntervalLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// A credible interval read off a sample collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibleInterval {
    /// Empirical quantile at `levels.lo()`
    pub lower: f64,
    /// Empirical quantile at `levels.hi()`
    pub upper: f64,
    /// Sample mean of the collection
    pub estimate: f64,
    /// Probability levels the bounds were taken at
    pub levels: IntervalLevels,
}

impl CredibleInterval {
    /// Create a new credible interval
    pub fn new(lower: f64, upper: f64, estimate: f64, levels: IntervalLevels) -> Self {
        Self {
            lower,
            upper,
            estimate,
            levels,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if `other` lies entirely inside this interval
    pub fn encloses(&self, other: &CredibleInterval) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &CredibleInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Bounds as a two-element pair `[lower, upper]`
    pub fn bounds(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

impl fmt::Display for CredibleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CrI {}: [{:.4}, {:.4}], estimate: {:.4}",
            self.levels.coverage() * 100.0,
            self.levels,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credible_interval() {
        let ci = CredibleInterval::new(2.0, 8.0, 5.0, IntervalLevels::default());

        assert_eq!(ci.width(), 6.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
        assert_eq!(ci.bounds(), [2.0, 8.0]);
    }

    #[test]
    fn test_overlap_and_enclosure() {
        let levels = IntervalLevels::default();
        let ci1 = CredibleInterval::new(2.0, 6.0, 4.0, levels);
        let ci2 = CredibleInterval::new(4.0, 8.0, 6.0, levels);
        let ci3 = CredibleInterval::new(7.0, 9.0, 8.0, levels);
        let inner = CredibleInterval::new(3.0, 5.0, 4.0, levels);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
        assert!(ci1.encloses(&inner));
        assert!(!inner.encloses(&ci1));
    }

    #[test]
    fn test_interval_levels_validation() {
        assert!(IntervalLevels::new(0.025, 0.975).is_ok());
        assert!(matches!(
            IntervalLevels::new(0.5, 0.4),
            Err(Error::InvalidConfidenceInterval { .. })
        ));
        assert!(matches!(
            IntervalLevels::new(-0.1, 0.9),
            Err(Error::InvalidConfidenceInterval { .. })
        ));
        assert!(IntervalLevels::from_slice(&[0.1, 0.9]).is_ok());
        assert!(IntervalLevels::from_slice(&[0.1]).is_err());
        assert!(IntervalLevels::from_slice(&[0.1, 0.5, 0.9]).is_err());
    }

    #[test]
    fn test_central_levels() {
        let levels = IntervalLevels::central(0.9).unwrap();
        assert!((levels.lo() - 0.05).abs() < 1e-12);
        assert!((levels.hi() - 0.95).abs() < 1e-12);
        assert!(IntervalLevels::central(1.5).is_err());
    }

    #[test]
    fn test_display() {
        let ci = CredibleInterval::new(2.5, 7.5, 5.0, IntervalLevels::default());
        let display = format!("{}", ci);
        assert!(display.contains("95.0%"));
        assert!(display.contains("2.5000"));
        assert!(display.contains("7.5000"));
        assert!(display.contains("5.0000"));
    }

    #[test]
    fn test_levels_deserialize_validates() {
        let ok: IntervalLevels = serde_json::from_str("[0.1, 0.9]").unwrap();
        assert_eq!(ok.as_array(), [0.1, 0.9]);
        assert!(serde_json::from_str::<IntervalLevels>("[0.9, 0.1]").is_err());
    }
}
