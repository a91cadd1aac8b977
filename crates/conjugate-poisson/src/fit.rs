//! Fixed-rate Poisson fit against an empirical frequency table

use conjugate_core::{validation::finite, Error, Result};
use conjugate_histogram::FrequencyTable;
use serde::Serialize;
use statrs::distribution::{Discrete, Poisson};

/// One observed value with its empirical and theoretical probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitPoint {
    pub value: u64,
    pub relative_frequency: f64,
    pub pmf: f64,
}

/// Poisson(`rate`) pmf evaluated at every observed value of one group
///
/// Overlaying `pmf` on `relative_frequency` is a goodness-of-fit picture
/// for the plain Poisson model at a fixed rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedRateFit {
    pub rate: f64,
    pub points: Vec<FitPoint>,
}

impl FixedRateFit {
    /// Evaluate the pmf over the values of `table`
    pub fn new(rate: f64, table: &FrequencyTable) -> Result<Self> {
        let rate = finite("fixed_rate", rate)?;
        let poisson = Poisson::new(rate)
            .map_err(|e| Error::distribution(&format!("Poisson(rate={rate})"), e))?;

        let points = table
            .bins()
            .iter()
            .map(|bin| FitPoint {
                value: bin.value,
                relative_frequency: bin.relative,
                pmf: poisson.pmf(bin.value),
            })
            .collect();
        Ok(Self { rate, points })
    }

    /// Largest absolute gap between empirical and theoretical probability
    pub fn max_abs_deviation(&self) -> f64 {
        self.points
            .iter()
            .map(|p| (p.relative_frequency - p.pmf).abs())
            .fold(0.0, f64::max)
    }
}
