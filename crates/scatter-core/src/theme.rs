// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart colors.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// CSS hex notation (`#rrggbb`); alpha is written separately as an opacity.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub point_fill: Color,
    pub button_fill: Color,
    pub button_label: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            axis_line: Color::rgb(0, 0, 0),
            axis_label: Color::rgb(0, 0, 0),
            tick: Color::rgb(0, 0, 0),
            point_fill: Color::rgb(0, 0, 0),
            button_fill: Color::rgb(230, 230, 235),
            button_label: Color::rgb(20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            point_fill: Color::rgb(64, 160, 255),
            button_fill: Color::rgb(40, 40, 45),
            button_label: Color::rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
