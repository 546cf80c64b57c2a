// File: crates/demo/src/settings.rs
// Summary: Layered chart configuration: optional TOML file, SCATTER_* environment, then CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use scatter_core::ChartConfig;
use tracing::warn;

/// Values given on the command line win over file and environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Option<f64>,
    pub points: Option<usize>,
    pub max_value: Option<f64>,
}

pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<ChartConfig> {
    load_with_env(file, overrides, config::Environment::with_prefix("SCATTER"))
}

pub fn load_with_env(
    file: Option<&Path>,
    overrides: &Overrides,
    env: config::Environment,
) -> Result<ChartConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path).required(true));
    }
    let settings = builder
        .add_source(env)
        .build()
        .context("reading chart configuration")?;
    let mut cfg: ChartConfig = settings
        .try_deserialize()
        .context("parsing chart configuration")?;

    if let Some(v) = overrides.width { cfg.width = v; }
    if let Some(v) = overrides.height { cfg.height = v; }
    if let Some(v) = overrides.padding { cfg.padding = v; }
    if let Some(v) = overrides.points { cfg.num_data_points = v; }
    if let Some(v) = overrides.max_value { cfg.max_value = v; }

    if let Err(e) = cfg.validate() {
        warn!(error = %e, "rejecting chart configuration");
        return Err(e).context("validating chart configuration");
    }
    Ok(cfg)
}
