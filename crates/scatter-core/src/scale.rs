// File: crates/scatter-core/src/scale.rs
// Summary: Linear domain-to-pixel scales derived from a data set.

use crate::data::{AxisSelector, DataSet};
use crate::grid::{nice_ticks, tick_step};
use crate::types::ChartConfig;

/// Linear interpolation from `[domain_min, domain_max]` to `[range_min, range_max]`.
///
/// The range may be reversed (`range_min > range_max`) for screen-space y.
/// A zero-width domain maps every input to `range_min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain_min: domain.0, domain_max: domain.1, range_min: range.0, range_max: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    pub fn is_degenerate(&self) -> bool {
        let span = self.domain_max - self.domain_min;
        span == 0.0 || !span.is_finite()
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_min;
        }
        let t = (v - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Inverse of [`LinearScale::to_px`]; a degenerate scale returns `domain_min`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.range_max - self.range_min;
        if self.is_degenerate() || span == 0.0 {
            return self.domain_min;
        }
        self.domain_min + (px - self.range_min) / span * (self.domain_max - self.domain_min)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_min, self.domain_max, count)
    }

    pub fn tick_step(&self, count: usize) -> Option<f64> {
        tick_step(self.domain_min, self.domain_max, count)
    }
}

/// Scale for one axis of `data`: domain `[0, max]`, range as given.
///
/// Empty data, all-zero data, or a negative maximum give a `[0, 0]` domain.
pub fn compute_scale(data: &DataSet, axis: AxisSelector, range_min: f64, range_max: f64) -> LinearScale {
    let max = data
        .max_along(axis)
        .filter(|m| m.is_finite() && *m > 0.0)
        .unwrap_or(0.0);
    LinearScale::new((0.0, max), (range_min, range_max))
}

/// X scale spanning `[padding, width - padding]`.
pub fn x_scale(data: &DataSet, config: &ChartConfig) -> LinearScale {
    let (lo, hi) = config.x_range();
    compute_scale(data, AxisSelector::X, lo, hi)
}

/// Y scale spanning `[height - padding, padding]`, so larger values sit higher.
pub fn y_scale(data: &DataSet, config: &ChartConfig) -> LinearScale {
    let (lo, hi) = config.y_range();
    compute_scale(data, AxisSelector::Y, lo, hi)
}
