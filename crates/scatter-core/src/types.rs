// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (chart size, padding, data set shape).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, Result};

/// Default surface width in pixels.
pub const WIDTH: f64 = 500.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 300.0;
/// Default padding between the surface edge and the plot, in pixels.
pub const PADDING: f64 = 30.0;
/// Default number of generated points.
pub const NUM_DATA_POINTS: usize = 50;
/// Default exclusive upper bound for generated coordinates.
pub const MAX_VALUE: f64 = 1000.0;

/// Chart dimensions and data set shape.
/// Contract: constant for the lifetime of a chart; call [`ChartConfig::validate`]
/// before composing with values that came from outside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    #[serde(deserialize_with = "non_negative_count")]
    pub num_data_points: usize,
    pub max_value: f64,
}

impl ChartConfig {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding, num_data_points: NUM_DATA_POINTS, max_value: MAX_VALUE }
    }

    pub const fn with_data_shape(mut self, num_data_points: usize, max_value: f64) -> Self {
        self.num_data_points = num_data_points;
        self.max_value = max_value;
        self
    }

    /// Reject dimensions that would produce a malformed visual.
    pub fn validate(&self) -> Result<()> {
        for (field, v) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("max_value", self.max_value),
        ] {
            if !v.is_finite() {
                return Err(ChartError::invalid(field, format!("must be finite, got {v}")));
            }
        }
        if self.width <= 0.0 {
            return Err(ChartError::invalid("width", format!("must be positive, got {}", self.width)));
        }
        if self.height <= 0.0 {
            return Err(ChartError::invalid("height", format!("must be positive, got {}", self.height)));
        }
        if self.padding < 0.0 {
            return Err(ChartError::invalid("padding", format!("must not be negative, got {}", self.padding)));
        }
        if self.padding * 2.0 >= self.width {
            return Err(ChartError::invalid("padding", "must be smaller than width / 2"));
        }
        if self.padding * 2.0 >= self.height {
            return Err(ChartError::invalid("padding", "must be smaller than height / 2"));
        }
        if self.max_value <= 0.0 {
            return Err(ChartError::invalid("max_value", format!("must be positive, got {}", self.max_value)));
        }
        Ok(())
    }

    /// Pixel span of the x range, left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Pixel span of the y range; inverted because screen y grows downward.
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.padding, self.padding)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}

fn non_negative_count<'de, D>(de: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(de)?;
    usize::try_from(raw).map_err(|_| {
        serde::de::Error::custom(format!("num_data_points must not be negative, got {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ChartConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.x_range(), (30.0, 470.0));
        assert_eq!(cfg.y_range(), (270.0, 30.0));
    }

    #[test]
    fn rejects_negative_dimensions() {
        let cfg = ChartConfig::new(-1.0, 300.0, 30.0);
        assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig { field: "width", .. })));
        let cfg = ChartConfig::new(500.0, 300.0, -2.0);
        assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig { field: "padding", .. })));
    }

    #[test]
    fn rejects_padding_that_collapses_the_plot() {
        let cfg = ChartConfig::new(500.0, 300.0, 150.0);
        assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig { field: "padding", .. })));
    }

    #[test]
    fn rejects_non_positive_max_value() {
        let cfg = ChartConfig::default().with_data_shape(10, 0.0);
        assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig { field: "max_value", .. })));
        let cfg = ChartConfig::default().with_data_shape(10, f64::NAN);
        assert!(cfg.validate().is_err());
    }
}
