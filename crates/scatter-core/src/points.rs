// File: crates/scatter-core/src/points.rs
// Summary: One circle marker per data point.

use crate::data::DataSet;
use crate::scale::LinearScale;

/// Default marker radius, in pixels.
pub const POINT_RADIUS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointVisual {
    /// Positional index; unique within one render.
    pub key: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

pub fn render_points(data: &DataSet, x_scale: &LinearScale, y_scale: &LinearScale, radius: f64) -> Vec<PointVisual> {
    data.iter()
        .enumerate()
        .map(|(key, p)| PointVisual { key, cx: x_scale.to_px(p.x), cy: y_scale.to_px(p.y), r: radius })
        .collect()
}
