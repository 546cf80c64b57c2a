// File: crates/scatter-core/src/svg.rs
// Summary: SVG document output for a composed chart.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::axis::{AxisOrientation, AxisVisual, TICK_PADDING, TICK_SIZE};
use crate::chart::ChartVisual;
use crate::error::Result;

const FONT_SIZE: f64 = 10.0;

impl ChartVisual {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> Result<String> {
        let mut out = String::with_capacity(256 + self.points.len() * 48);
        let t = &self.theme;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        )?;
        writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, t.background)?;

        writeln!(out, r#"  <g fill="{}">"#, t.point_fill)?;
        for p in &self.points {
            writeln!(out, r#"    <circle data-key="{}" cx="{}" cy="{}" r="{}"/>"#, p.key, p.cx, p.cy, p.r)?;
        }
        writeln!(out, "  </g>")?;

        for axis in &self.axes {
            write_axis(&mut out, axis, self)?;
        }
        writeln!(out, "</svg>")?;
        Ok(out)
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let doc = self.to_svg()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, doc)?;
        debug!(path = %path.display(), "wrote svg");
        Ok(())
    }
}

fn write_axis(out: &mut String, axis: &AxisVisual, chart: &ChartVisual) -> Result<()> {
    let t = &chart.theme;
    let (tx, ty) = axis.translate;
    let anchor = match axis.orientation {
        AxisOrientation::Bottom => "middle",
        AxisOrientation::Left => "end",
    };
    writeln!(
        out,
        r#"  <g class="{}" transform="translate({tx},{ty})" fill="none" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="{anchor}">"#,
        axis.class_name()
    )?;
    writeln!(out, r#"    <path class="domain" stroke="{}" d="{}"/>"#, t.axis_line, axis.domain_path())?;

    let gap = TICK_SIZE + TICK_PADDING;
    for tick in &axis.ticks {
        let p = tick.position;
        let label = escape(&tick.label);
        match axis.orientation {
            AxisOrientation::Bottom => writeln!(
                out,
                r#"    <g class="tick" transform="translate({p},0)"><line stroke="{}" y2="{TICK_SIZE}"/><text fill="{}" y="{gap}" dy="0.71em">{label}</text></g>"#,
                t.tick, t.axis_label
            )?,
            AxisOrientation::Left => writeln!(
                out,
                r#"    <g class="tick" transform="translate(0,{p})"><line stroke="{}" x2="-{TICK_SIZE}"/><text fill="{}" x="-{gap}" dy="0.32em">{label}</text></g>"#,
                t.tick, t.axis_label
            )?,
        }
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use crate::chart::compose;
    use crate::data::DataSet;
    use crate::types::ChartConfig;

    #[test]
    fn document_has_one_circle_per_point_and_two_axes() {
        let data = DataSet::from(vec![(0.0, 0.0), (500.0, 250.0), (1000.0, 999.0)]);
        let svg = compose(&data, &ChartConfig::default()).to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="500" height="300""#));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(r#"class="xAxis" transform="translate(0,270)""#));
        assert!(svg.contains(r#"class="yAxis" transform="translate(30,0)""#));
        assert!(svg.contains(">1,000</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
