//! Offline preview: synthesize one heightmap and write it as PNGs.
//!
//! Writes `heightmap.png` (greyscale, what the canvas shows) and
//! `terrain.png` (low/high gradient, what the shader colours).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use relief_core::{raster, HeightGrid, HeightmapSynthesizer, Rgba, TerrainParams};

#[derive(Parser, Debug)]
#[command(name = "preview", about = "Render a procedural heightmap to PNG")]
struct Args {
    /// JSON parameter document; flags below override its fields.
    #[arg(short, long)]
    params: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Grid side length in samples.
    #[arg(long)]
    lod: Option<usize>,

    #[arg(long)]
    frequency: Option<f64>,

    #[arg(long)]
    exponent: Option<f64>,

    #[arg(long)]
    octaves: Option<u32>,

    #[arg(long)]
    amplitude_step: Option<f64>,

    /// Keep raw octave values instead of rescaling to [0, 1].
    #[arg(long)]
    raw: bool,

    /// Gradient colour at height 0 (hex).
    #[arg(long)]
    low: Option<String>,

    /// Gradient colour at height 1 (hex).
    #[arg(long)]
    high: Option<String>,

    /// Draw seed and shape at random before applying overrides.
    #[arg(long)]
    randomize: bool,

    #[arg(short, long, default_value = "data/preview")]
    out_dir: PathBuf,
}

fn load_params(args: &Args) -> Result<TerrainParams> {
    let mut params = match &args.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            TerrainParams::from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => TerrainParams::default(),
    };

    if args.randomize {
        params.noise.randomize(&mut rand::thread_rng());
    }
    if let Some(seed) = args.seed { params.noise.seed = seed; }
    if let Some(lod) = args.lod { params.lod = lod; }
    if let Some(f) = args.frequency { params.noise.frequency = f; }
    if let Some(e) = args.exponent { params.noise.exponent = e; }
    if let Some(o) = args.octaves { params.noise.octaves = o; }
    if let Some(s) = args.amplitude_step { params.noise.amplitude_step = s; }
    if args.raw { params.normalize = false; }
    if let Some(hex) = &args.low {
        params.colors.low = Rgba::from_hex(hex).context("--low")?;
    }
    if let Some(hex) = &args.high {
        params.colors.high = Rgba::from_hex(hex).context("--high")?;
    }

    params.validate().context("invalid parameters")?;
    Ok(params)
}

fn save_luma(grid: &HeightGrid, path: &Path) -> Result<()> {
    let side = grid.lod as u32;
    let img = image::GrayImage::from_raw(side, side, raster::to_luma8(grid))
        .context("luma buffer does not match grid size")?;
    img.save(path).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn save_rgba(grid: &HeightGrid, params: &TerrainParams, path: &Path) -> Result<()> {
    let side = grid.lod as u32;
    let img = image::RgbaImage::from_raw(side, side, raster::to_rgba8_gradient(grid, &params.colors))
        .context("rgba buffer does not match grid size")?;
    img.save(path).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;
    log::info!(
        "seed={} lod={} frequency={} exponent={} octaves={} step={}",
        params.noise.seed,
        params.lod,
        params.noise.frequency,
        params.noise.exponent,
        params.noise.octaves,
        params.noise.amplitude_step,
    );

    let grid = HeightmapSynthesizer::new(&params)?.synthesize()?;
    log::info!("height range [{:.4}, {:.4}]", grid.min_value(), grid.max_value());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    save_luma(&grid, &args.out_dir.join("heightmap.png"))?;
    save_rgba(&grid, &params, &args.out_dir.join("terrain.png"))?;

    let used = args.out_dir.join("params.json");
    fs::write(&used, params.to_json()?).with_context(|| format!("writing {}", used.display()))?;
    Ok(())
}
