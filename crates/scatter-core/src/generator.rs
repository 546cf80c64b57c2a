// File: crates/scatter-core/src/generator.rs
// Summary: Random data set generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::data::{DataPoint, DataSet};
use crate::error::{ChartError, Result};

/// Produces data sets of independent, uniformly distributed points.
///
/// Coordinates are whole numbers in `[0, max_value)` by default (the value is
/// floored after sampling); [`DataGenerator::continuous`] keeps the raw sample.
#[derive(Debug)]
pub struct DataGenerator<R = StdRng> {
    rng: R,
    integral: bool,
}

impl DataGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DataGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> DataGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, integral: true }
    }

    pub fn continuous(mut self) -> Self {
        self.integral = false;
        self
    }

    /// Generate `count` fresh points. Every call draws new samples.
    pub fn generate(&mut self, count: usize, max_value: f64) -> Result<DataSet> {
        check_max_value(max_value)?;
        let points = (0..count)
            .map(|_| DataPoint::new(self.sample(max_value), self.sample(max_value)))
            .collect::<DataSet>();
        debug!(count, max_value, "generated data set");
        Ok(points)
    }

    fn sample(&mut self, max_value: f64) -> f64 {
        let v = self.rng.gen_range(0.0..max_value);
        if self.integral {
            v.floor()
        } else {
            v
        }
    }
}

/// Generate a data set with the thread-local RNG.
pub fn generate(count: usize, max_value: f64) -> Result<DataSet> {
    DataGenerator::with_rng(rand::thread_rng()).generate(count, max_value)
}

fn check_max_value(max_value: f64) -> Result<()> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(ChartError::invalid(
            "max_value",
            format!("must be a positive finite number, got {max_value}"),
        ));
    }
    Ok(())
}
