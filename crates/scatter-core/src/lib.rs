// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for generating, composing and writing the scatter plot.

pub mod axis;
pub mod chart;
pub mod data;
pub mod error;
pub mod generator;
pub mod grid;
pub mod points;
pub mod scale;
pub mod state;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{render_axis, AxisOrientation, AxisVisual, TickVisual};
pub use chart::{compose, compose_with, ChartVisual, RenderOptions};
pub use data::{AxisSelector, DataPoint, DataSet};
pub use error::{ChartError, Result};
pub use generator::{generate, DataGenerator};
pub use points::{render_points, PointVisual};
pub use scale::{compute_scale, x_scale, y_scale, LinearScale};
pub use state::{Action, LocalState, StateController, StateHolder, Store};
pub use theme::{Color, Theme};
pub use types::ChartConfig;
