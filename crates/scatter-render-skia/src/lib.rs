// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for composed scatter charts, plus the "Randomize Data" button widget.

use std::path::Path;

use anyhow::{anyhow, Result};
use scatter_core::axis::AxisOrientation;
use scatter_core::{ChartVisual, Color, Theme};
use skia_safe as skia;
use tracing::debug;

const LABEL_SIZE: f32 = 10.0;
const BUTTON_LABEL_SIZE: f32 = 14.0;

/// Clickable rectangle with a caption, in surface pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
}

impl Button {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x, y) = (x as f32, y as f32);
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    fn rect(&self) -> skia::Rect {
        skia::Rect::from_xywh(self.left, self.top, self.width, self.height)
    }
}

/// The "Randomize Data" control, placed under the chart's left edge.
pub fn randomize_button(chart: &ChartVisual) -> Button {
    Button {
        left: 12.0,
        top: chart.height as f32 + 12.0,
        width: 140.0,
        height: 32.0,
        label: "Randomize Data".to_string(),
    }
}

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    label_font: skia::Font,
    button_font: skia::Font,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default());
        let make = |size: f32| match &typeface {
            Some(tf) => skia::Font::new(tf.clone(), size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        };
        Self { label_font: make(LABEL_SIZE), button_font: make(BUTTON_LABEL_SIZE) }
    }

    /// Draw the chart at the canvas origin.
    pub fn draw_chart(&self, canvas: &skia::Canvas, chart: &ChartVisual) {
        let theme = &chart.theme;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(sk(theme.point_fill));
        for p in &chart.points {
            canvas.draw_circle((p.cx as f32, p.cy as f32), p.r as f32, &fill);
        }
        self.draw_axes(canvas, chart);
    }

    fn draw_axes(&self, canvas: &skia::Canvas, chart: &ChartVisual) {
        let theme = &chart.theme;
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);

        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(sk(theme.axis_label));

        for axis in &chart.axes {
            line.set_color(sk(theme.axis_line));
            let (a, b) = axis.baseline();
            canvas.draw_line(pt(a), pt(b), &line);

            line.set_color(sk(theme.tick));
            for tick in &axis.ticks {
                let (t0, t1) = axis.tick_line(tick);
                canvas.draw_line(pt(t0), pt(t1), &line);

                let (ax, ay) = axis.label_anchor(tick);
                let (w, _) = self.label_font.measure_str(&tick.label, Some(&text));
                let origin = match axis.orientation {
                    // Centered under the tick, cap height below the anchor.
                    AxisOrientation::Bottom => (ax as f32 - w * 0.5, ay as f32 + LABEL_SIZE * 0.8),
                    AxisOrientation::Left => (ax as f32 - w, ay as f32 + LABEL_SIZE * 0.35),
                };
                canvas.draw_str(&tick.label, origin, &self.label_font, &text);
            }
        }
    }

    pub fn draw_button(&self, canvas: &skia::Canvas, button: &Button, theme: &Theme) {
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(sk(theme.button_fill));
        canvas.draw_round_rect(button.rect(), 4.0, 4.0, &bg);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_color(sk(theme.axis_line));
        canvas.draw_round_rect(button.rect(), 4.0, 4.0, &border);

        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(sk(theme.button_label));
        let (w, _) = self.button_font.measure_str(&button.label, Some(&text));
        let x = button.left + (button.width - w) * 0.5;
        let y = button.top + button.height * 0.5 + BUTTON_LABEL_SIZE * 0.35;
        canvas.draw_str(&button.label, (x, y), &self.button_font, &text);
    }

    /// Render a `width` x `height` frame: background, chart, and optionally a button.
    pub fn render_surface(
        &self,
        chart: &ChartVisual,
        button: Option<&Button>,
        width: i32,
        height: i32,
    ) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(sk(chart.theme.background));
        self.draw_chart(canvas, chart);
        if let Some(b) = button {
            self.draw_button(canvas, b, &chart.theme);
        }
        Ok(surface)
    }

    /// Chart-sized frame as tightly packed RGBA8 rows.
    /// Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, chart: &ChartVisual) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = chart_size(chart);
        let mut surface = self.render_surface(chart, None, w, h)?;
        let px = read_rgba8(&mut surface, w, h)?;
        Ok((px, w, h, w as usize * 4))
    }

    pub fn render_to_png_bytes(&self, chart: &ChartVisual) -> Result<Vec<u8>> {
        let (w, h) = chart_size(chart);
        let mut surface = self.render_surface(chart, None, w, h)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, chart: &ChartVisual, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(chart)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy the surface into tightly packed, unpremultiplied RGBA8.
pub fn read_rgba8(surface: &mut skia::Surface, width: i32, height: i32) -> Result<Vec<u8>> {
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = width as usize * 4;
    let mut px = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
        return Err(anyhow!("reading {width}x{height} pixels from surface failed"));
    }
    Ok(px)
}

fn chart_size(chart: &ChartVisual) -> (i32, i32) {
    (chart.width.ceil() as i32, chart.height.ceil() as i32)
}

#[inline]
fn pt((x, y): (f64, f64)) -> (f32, f32) {
    (x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatter_core::{compose, ChartConfig, DataSet};

    #[test]
    fn button_hit_test() {
        let chart = compose(&DataSet::empty(), &ChartConfig::default());
        let b = randomize_button(&chart);
        assert!(b.contains(20.0, 320.0));
        assert!(!b.contains(20.0, 200.0));
        assert!(!b.contains(400.0, 320.0));
    }
}
