//! Height grid → pixel buffers for canvas `ImageData` and PNG previews.
//! Heights are clamped to [0, 1] before quantising.

use crate::gradient::ColorGradient;
use crate::heightgrid::HeightGrid;

/// Quantise one height to an 8-bit grey level.
#[inline]
pub fn luma(h: f32) -> u8 {
    (h.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// One byte per cell, row-major.
pub fn to_luma8(grid: &HeightGrid) -> Vec<u8> {
    grid.data.iter().map(|&h| luma(h)).collect()
}

/// Four bytes per cell (R = G = B = grey, A = 255), the canvas `ImageData` layout.
pub fn to_rgba8_greyscale(grid: &HeightGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.len() * 4);
    for &h in &grid.data {
        let l = luma(h);
        out.extend_from_slice(&[l, l, l, 255]);
    }
    out
}

/// Four bytes per cell, coloured through `gradient`.
pub fn to_rgba8_gradient(grid: &HeightGrid, gradient: &ColorGradient) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.len() * 4);
    for &h in &grid.data {
        out.extend_from_slice(&gradient.sample(h).0);
    }
    out
}
