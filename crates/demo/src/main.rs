// File: crates/demo/src/main.rs
// Summary: Demo builds the scatter chart, randomizes it N times, and writes SVG (and optionally PNG/CSV) per frame.

mod settings;

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{
    theme, DataGenerator, DataSet, LocalState, RenderOptions, StateController, StateHolder, Store,
};
use scatter_render_skia::SkiaRenderer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render randomly generated scatter plots to files.
#[derive(Parser, Debug)]
#[command(name = "scatter-demo")]
#[command(version)]
#[command(about = "Writes scatter plots of random data, one file per randomization", long_about = None)]
struct Cli {
    /// TOML config file (width, height, padding, num_data_points, max_value)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// How many times to press "Randomize Data" after the initial frame
    #[arg(short, long, default_value_t = 0)]
    randomize: usize,

    /// Also rasterize each frame to PNG
    #[arg(long)]
    png: bool,

    /// Also export each frame's data set as CSV
    #[arg(long)]
    csv: bool,

    /// Seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Drive the chart from a centralized store instead of chart-owned state
    #[arg(long)]
    store: bool,

    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    padding: Option<f64>,
    #[arg(long)]
    points: Option<usize>,
    #[arg(long)]
    max_value: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let overrides = settings::Overrides {
        width: cli.width,
        height: cli.height,
        padding: cli.padding,
        points: cli.points,
        max_value: cli.max_value,
    };
    let cfg = settings::load(cli.config.as_deref(), &overrides)?;
    info!(?cfg, "configuration loaded");

    let opts = RenderOptions { theme: theme::find(&cli.theme), ..RenderOptions::default() };
    let generator = match cli.seed {
        Some(seed) => DataGenerator::seeded(seed),
        None => DataGenerator::from_entropy(),
    };

    if cli.store {
        let store = Store::with_generator(&cfg, generator)?;
        run(StateController::with_holder(cfg, opts, store)?, &cli)
    } else {
        let local = LocalState::with_generator(&cfg, generator)?;
        run(StateController::with_holder(cfg, opts, local)?, &cli)
    }
}

fn run<H: StateHolder>(mut ctl: StateController<H>, cli: &Cli) -> Result<()> {
    let renderer = cli.png.then(SkiaRenderer::new);
    let frames = Rc::new(Cell::new(0usize));
    let seen = Rc::clone(&frames);
    ctl.subscribe(move |visual| {
        seen.set(seen.get() + 1);
        tracing::debug!(frame = seen.get(), points = visual.points.len(), "view updated");
    });

    for frame in 0..=cli.randomize {
        if frame > 0 {
            ctl.randomize().context("randomizing data")?;
        }
        write_frame(&ctl, renderer.as_ref(), &cli.out, frame, cli.csv)?;
    }

    println!("Rendered {} frame(s) into {}", frames.get(), cli.out.display());
    Ok(())
}

fn write_frame<H: StateHolder>(
    ctl: &StateController<H>,
    renderer: Option<&SkiaRenderer>,
    out_dir: &Path,
    frame: usize,
    csv: bool,
) -> Result<()> {
    let svg = out_name(out_dir, frame, "svg");
    ctl.visual()
        .write_svg(&svg)
        .with_context(|| format!("writing {}", svg.display()))?;
    println!("Wrote {}", svg.display());

    if let Some(r) = renderer {
        let png = out_name(out_dir, frame, "png");
        r.render_to_png(ctl.visual(), &png)
            .with_context(|| format!("writing {}", png.display()))?;
        println!("Wrote {}", png.display());
    }

    if csv {
        let path = out_name(out_dir, frame, "csv");
        write_csv(ctl.data(), &path).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Produce output file name like target/out/scatter_003.svg
fn out_name(dir: &Path, frame: usize, ext: &str) -> PathBuf {
    dir.join(format!("scatter_{frame:03}.{ext}"))
}

#[derive(serde::Serialize)]
struct Row {
    index: usize,
    x: f64,
    y: f64,
}

fn write_csv(data: &DataSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for (index, p) in data.iter().enumerate() {
        wtr.serialize(Row { index, x: p.x, y: p.y })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(out_name(Path::new("o"), 7, "svg"), PathBuf::from("o/scatter_007.svg"));
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.csv");
        write_csv(&DataSet::from(vec![(1.0, 2.0), (3.0, 4.0)]), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, ["index,x,y", "0,1.0,2.0", "1,3.0,4.0"]);
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from(["scatter-demo", "--randomize", "3", "--points", "10", "--store", "--theme", "dark"]);
        assert_eq!(cli.randomize, 3);
        assert_eq!(cli.points, Some(10));
        assert!(cli.store);
        assert_eq!(cli.theme, "dark");
    }
}
