//! Procedural heightmap synthesis for the relief terrain viewer.
//!
//! A seeded simplex source is layered into fractal noise, optionally
//! min-max normalised, and handed out as a flat row-major grid that the
//! browser paints to a canvas and feeds to the displacement shader.

pub mod controller;
pub mod error;
pub mod gradient;
pub mod heightgrid;
pub mod noise;
pub mod normalize;
pub mod params;
pub mod raster;
pub mod synth;

pub use controller::{Command, TerrainController};
pub use error::ParamError;
pub use gradient::{ColorGradient, Rgba};
pub use heightgrid::HeightGrid;
pub use params::{NoiseParams, TerrainParams};
pub use synth::{generate, HeightmapSynthesizer};
