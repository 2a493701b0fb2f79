//! Two-stop colour ramp shared by the canvas preview and the terrain shader.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Straight (non-premultiplied) 8-bit RGBA colour. Serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    /// Missing alpha means opaque.
    pub fn from_hex(s: &str) -> Result<Self, ParamError> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParamError::Color(s.to_string()));
        }
        let expanded: Vec<u8> = match hex.len() {
            3 | 4 => hex.bytes().flat_map(|b| [b, b]).collect(),
            6 | 8 => hex.bytes().collect(),
            _ => return Err(ParamError::Color(s.to_string())),
        };

        let mut rgba = [0, 0, 0, 255];
        for (slot, pair) in rgba.iter_mut().zip(expanded.chunks(2)) {
            *slot = (hex_digit(pair[0]) << 4) | hex_digit(pair[1]);
        }
        Ok(Self(rgba))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

// Caller has already checked `is_ascii_hexdigit`.
fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _           => b - b'A' + 10,
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParamError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_hex()
    }
}

/// Linear ramp from `low` (height 0) to `high` (height 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorGradient {
    pub low: Rgba,
    pub high: Rgba,
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self {
            low:  Rgba([0x2b, 0x3a, 0x1f, 0xff]),
            high: Rgba([0xf2, 0xef, 0xe6, 0xff]),
        }
    }
}

impl ColorGradient {
    pub fn new(low: Rgba, high: Rgba) -> Self {
        Self { low, high }
    }

    /// Colour at height `h`, clamped to [0, 1]. NaN samples the low stop.
    pub fn sample(&self, h: f32) -> Rgba {
        let t = if h.is_nan() { 0.0 } else { h.clamp(0.0, 1.0) };
        let mut out = [0u8; 4];
        for (i, c) in out.iter_mut().enumerate() {
            let lo = f32::from(self.low.0[i]);
            let hi = f32::from(self.high.0[i]);
            *c = (lo + (hi - lo) * t).round() as u8;
        }
        Rgba(out)
    }
}
