// File: crates/scatter-core/src/chart.rs
// Summary: Composes scales, point markers and axes into a complete chart visual.

use tracing::debug;

use crate::axis::{render_axis, AxisOrientation, AxisVisual};
use crate::data::DataSet;
use crate::points::{render_points, PointVisual, POINT_RADIUS};
use crate::scale::{x_scale, y_scale};
use crate::theme::Theme;
use crate::types::ChartConfig;

/// Default number of ticks requested per axis.
pub const TICK_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub tick_count: usize,
    pub point_radius: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { tick_count: TICK_COUNT, point_radius: POINT_RADIUS, theme: Theme::default() }
    }
}

/// Everything needed to draw one frame: the surface size, the markers, and
/// the two axes (bottom for x, then left for y).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartVisual {
    pub width: f64,
    pub height: f64,
    pub points: Vec<PointVisual>,
    pub axes: [AxisVisual; 2],
    pub theme: Theme,
}

impl ChartVisual {
    pub fn x_axis(&self) -> &AxisVisual {
        &self.axes[0]
    }

    pub fn y_axis(&self) -> &AxisVisual {
        &self.axes[1]
    }
}

pub fn compose(data: &DataSet, config: &ChartConfig) -> ChartVisual {
    compose_with(data, config, &RenderOptions::default())
}

pub fn compose_with(data: &DataSet, config: &ChartConfig, opts: &RenderOptions) -> ChartVisual {
    let xs = x_scale(data, config);
    let ys = y_scale(data, config);
    debug!(points = data.len(), x_domain = ?xs.domain(), y_domain = ?ys.domain(), "composing chart");

    ChartVisual {
        width: config.width,
        height: config.height,
        points: render_points(data, &xs, &ys, opts.point_radius),
        axes: [
            render_axis(&xs, AxisOrientation::Bottom, opts.tick_count, config),
            render_axis(&ys, AxisOrientation::Left, opts.tick_count, config),
        ],
        theme: opts.theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_still_has_axes() {
        let v = compose(&DataSet::empty(), &ChartConfig::default());
        assert!(v.points.is_empty());
        assert_eq!(v.x_axis().orientation, AxisOrientation::Bottom);
        assert_eq!(v.y_axis().orientation, AxisOrientation::Left);
    }

    #[test]
    fn options_flow_through() {
        let data = DataSet::from(vec![(10.0, 10.0)]);
        let opts = RenderOptions { tick_count: 2, point_radius: 2.0, theme: Theme::dark() };
        let v = compose_with(&data, &ChartConfig::default(), &opts);
        assert_eq!(v.points[0].r, 2.0);
        assert_eq!(v.theme.name, "dark");
        assert_eq!(v.points[0].cx, 470.0);
        assert_eq!(v.points[0].cy, 30.0);
    }

    #[test]
    fn subnormal_maximum_composes() {
        let data = DataSet::from(vec![(1e-310, 1e-310), (0.0, 0.0)]);
        let v = compose(&data, &ChartConfig::default());
        assert_eq!(v.points[0].cx, 470.0);
        assert_eq!(v.points[0].cy, 30.0);
        for axis in &v.axes {
            assert_eq!(axis.ticks.len(), 1);
            assert_eq!(axis.ticks[0].label, "0");
        }
    }

    #[test]
    fn huge_tick_count_stays_bounded() {
        let data = DataSet::from(vec![(1000.0, 1000.0)]);
        let opts = RenderOptions { tick_count: usize::MAX, ..RenderOptions::default() };
        let v = compose_with(&data, &ChartConfig::default(), &opts);
        for axis in &v.axes {
            assert_eq!(axis.ticks.len(), crate::grid::MAX_TICK_COUNT + 1);
            assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("1,000"));
        }
    }
}
