// File: crates/scatter-core/src/axis.rs
// Summary: Axis model: orientation, baseline, and tick marks derived from a scale.

use crate::grid::format_tick;
use crate::scale::LinearScale;
use crate::types::ChartConfig;

/// Length of a tick mark, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label, in pixels.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

impl AxisOrientation {
    pub fn class_name(self) -> &'static str {
        match self {
            AxisOrientation::Bottom => "xAxis",
            AxisOrientation::Left => "yAxis",
        }
    }

    /// Offset of the axis group within the chart.
    pub fn translate(self, config: &ChartConfig) -> (f64, f64) {
        match self {
            AxisOrientation::Bottom => (0.0, config.height - config.padding),
            AxisOrientation::Left => (config.padding, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickVisual {
    pub value: f64,
    /// Pixel coordinate along the axis (x for bottom, y for left).
    pub position: f64,
    pub label: String,
}

/// Positioned axis group. Coordinates of the baseline and ticks are local to
/// the group; add [`AxisVisual::translate`] to get chart coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisVisual {
    pub orientation: AxisOrientation,
    pub translate: (f64, f64),
    /// Pixel extent of the baseline along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<TickVisual>,
}

impl AxisVisual {
    pub fn class_name(&self) -> &'static str {
        self.orientation.class_name()
    }

    /// Baseline with outer ticks at both ends, as SVG path data.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orientation {
            AxisOrientation::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            AxisOrientation::Left => format!("M{},{r0}H0V{r1}H{}", -TICK_SIZE, -TICK_SIZE),
        }
    }

    /// Baseline endpoints in chart coordinates.
    pub fn baseline(&self) -> ((f64, f64), (f64, f64)) {
        let (tx, ty) = self.translate;
        let (r0, r1) = self.range;
        match self.orientation {
            AxisOrientation::Bottom => ((tx + r0, ty), (tx + r1, ty)),
            AxisOrientation::Left => ((tx, ty + r0), (tx, ty + r1)),
        }
    }

    /// Tick mark endpoints in chart coordinates.
    pub fn tick_line(&self, tick: &TickVisual) -> ((f64, f64), (f64, f64)) {
        let (tx, ty) = self.translate;
        match self.orientation {
            AxisOrientation::Bottom => ((tx + tick.position, ty), (tx + tick.position, ty + TICK_SIZE)),
            AxisOrientation::Left => ((tx, ty + tick.position), (tx - TICK_SIZE, ty + tick.position)),
        }
    }

    /// Label anchor in chart coordinates.
    pub fn label_anchor(&self, tick: &TickVisual) -> (f64, f64) {
        let (tx, ty) = self.translate;
        let gap = TICK_SIZE + TICK_PADDING;
        match self.orientation {
            AxisOrientation::Bottom => (tx + tick.position, ty + gap),
            AxisOrientation::Left => (tx - gap, ty + tick.position),
        }
    }
}

/// Lay out an axis for `scale`: a baseline across the scale's range and
/// roughly `tick_count` evenly spaced ticks over its domain.
pub fn render_axis(
    scale: &LinearScale,
    orientation: AxisOrientation,
    tick_count: usize,
    config: &ChartConfig,
) -> AxisVisual {
    let step = scale.tick_step(tick_count);
    let ticks = scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| TickVisual { value, position: scale.to_px(value), label: format_tick(value, step) })
        .collect();
    AxisVisual { orientation, translate: orientation.translate(config), range: scale.range(), ticks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> LinearScale {
        LinearScale::new((0.0, 1000.0), (30.0, 470.0))
    }

    #[test]
    fn bottom_axis_sits_on_plot_floor() {
        let cfg = ChartConfig::default();
        let axis = render_axis(&scale(), AxisOrientation::Bottom, 5, &cfg);
        assert_eq!(axis.translate, (0.0, 270.0));
        assert_eq!(axis.class_name(), "xAxis");
        assert_eq!(axis.baseline(), ((30.0, 270.0), (470.0, 270.0)));
        let labels: Vec<_> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "200", "400", "600", "800", "1,000"]);
        assert_eq!(axis.ticks[0].position, 30.0);
    }

    #[test]
    fn left_axis_translates_by_padding() {
        let cfg = ChartConfig::default();
        let y = LinearScale::new((0.0, 100.0), (270.0, 30.0));
        let axis = render_axis(&y, AxisOrientation::Left, 5, &cfg);
        assert_eq!(axis.translate, (30.0, 0.0));
        assert_eq!(axis.domain_path(), "M-6,270H0V30H-6");
        let last = axis.ticks.last().unwrap();
        assert_eq!(last.position, 30.0);
        assert_eq!(axis.tick_line(last), ((30.0, 30.0), (24.0, 30.0)));
        assert_eq!(axis.label_anchor(last), (21.0, 30.0));
    }

    #[test]
    fn rendering_is_idempotent() {
        let cfg = ChartConfig::default();
        let a = render_axis(&scale(), AxisOrientation::Bottom, 5, &cfg);
        let b = render_axis(&scale(), AxisOrientation::Bottom, 5, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_scale_has_one_tick() {
        let cfg = ChartConfig::default();
        let s = LinearScale::new((0.0, 0.0), (30.0, 470.0));
        let axis = render_axis(&s, AxisOrientation::Bottom, 5, &cfg);
        assert_eq!(axis.ticks.len(), 1);
        assert_eq!(axis.ticks[0].position, 30.0);
        assert_eq!(axis.ticks[0].label, "0");
    }
}
