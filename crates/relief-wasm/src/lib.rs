//! Browser bindings: the page hands over slider values, gets back the height
//! array for the displacement texture and RGBA bytes for the preview canvas.

use anyhow::{Context, Result};
use js_sys::Float32Array;
use rand::{rngs::StdRng, SeedableRng};
use relief_core::{raster, HeightGrid, HeightmapSynthesizer, TerrainParams};
use wasm_bindgen::prelude::*;

// ── Pure helpers (testable off-wasm) ──────────────────────────────────────────

fn synthesize(params: &TerrainParams) -> Result<HeightGrid> {
    let grid = HeightmapSynthesizer::new(params)?.synthesize()?;
    Ok(grid)
}

fn params_from_json(json: &str) -> Result<TerrainParams> {
    TerrainParams::from_json(json).context("Invalid params")
}

fn randomized(seed: u64) -> Result<TerrainParams> {
    let mut params = TerrainParams::default();
    params.noise.randomize(&mut StdRng::seed_from_u64(seed));
    params.validate()?;
    Ok(params)
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// `undefined`/`null` select the defaults; objects may be partial.
fn params_from_js(value: JsValue) -> Result<TerrainParams, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(TerrainParams::default());
    }
    let params: TerrainParams = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid params: {e}")))?;
    params.validate().map_err(|e| JsValue::from_str(&format!("Invalid params: {e}")))?;
    Ok(params)
}

// ── Exports ───────────────────────────────────────────────────────────────────

/// Row-major heights, `lod * lod` long, for the displacement texture.
#[wasm_bindgen]
pub fn generate(params: JsValue) -> Result<Float32Array, JsValue> {
    let params = params_from_js(params)?;
    let grid = synthesize(&params).map_err(to_js)?;
    Ok(Float32Array::from(grid.as_slice()))
}

/// Same as [`generate`] with a JSON parameter document.
#[wasm_bindgen]
pub fn generate_json(params_json: &str) -> Result<Float32Array, JsValue> {
    let grid = params_from_json(params_json)
        .and_then(|p| synthesize(&p))
        .map_err(to_js)?;
    Ok(Float32Array::from(grid.as_slice()))
}

/// Greyscale RGBA bytes sized for `new ImageData(bytes, lod, lod)`.
#[wasm_bindgen]
pub fn paint_greyscale(params: JsValue) -> Result<Vec<u8>, JsValue> {
    let params = params_from_js(params)?;
    let grid = synthesize(&params).map_err(to_js)?;
    Ok(raster::to_rgba8_greyscale(&grid))
}

/// RGBA bytes coloured through the parameters' low/high gradient.
#[wasm_bindgen]
pub fn paint_gradient(params: JsValue) -> Result<Vec<u8>, JsValue> {
    let params = params_from_js(params)?;
    let grid = synthesize(&params).map_err(to_js)?;
    Ok(raster::to_rgba8_gradient(&grid, &params.colors))
}

#[wasm_bindgen]
pub fn default_params() -> Result<String, JsValue> {
    TerrainParams::default()
        .to_json()
        .map_err(|e| to_js(e.into()))
}

/// Parameters for the "randomise" timer; `seed` drives every draw.
#[wasm_bindgen]
pub fn randomize_params(seed: u64) -> Result<String, JsValue> {
    randomized(seed)
        .and_then(|p| Ok(p.to_json()?))
        .map_err(to_js)
}
