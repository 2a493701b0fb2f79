//! User-facing synthesis parameters.
//!
//! Plain values passed into the synthesizer; the caller owns persistence and
//! change detection. Every field has a default so partial JSON documents
//! (as sent by the control panel) deserialize cleanly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::gradient::ColorGradient;

pub const MAX_LOD: usize = 4096;
pub const MAX_OCTAVES: u32 = 10;

/// Shape of the fractal noise at one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub seed: u64,
    /// Number of feature cycles across the grid (>= 1).
    pub frequency: f64,
    /// Power applied to the octave mean; > 1 sharpens peaks and flattens valleys.
    pub exponent: f64,
    /// 1-10.
    pub octaves: u32,
    /// Increment between successive octave amplitudes.
    pub amplitude_step: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 4.0,
            exponent: 2.0,
            octaves: 6,
            amplitude_step: 2.0,
        }
    }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.frequency.is_finite() || self.frequency < 1.0 {
            return Err(ParamError::Frequency(self.frequency));
        }
        if !self.exponent.is_finite() || self.exponent < 1.0 {
            return Err(ParamError::Exponent(self.exponent));
        }
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(ParamError::Octaves(self.octaves));
        }
        if !self.amplitude_step.is_finite() || self.amplitude_step < 0.0 {
            return Err(ParamError::AmplitudeStep(self.amplitude_step));
        }
        Ok(())
    }

    /// Draw a fresh seed and shape, staying inside the control panel's slider ranges.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.seed = rng.gen();
        self.frequency = rng.gen_range(1.0..=10.0);
        self.exponent = rng.gen_range(1.0..=5.0);
        self.octaves = rng.gen_range(1..=MAX_OCTAVES);
        // Step slider moves in 0.5 increments.
        self.amplitude_step = f64::from(rng.gen_range(1u8..=10)) * 0.5;
    }
}

/// Everything needed to produce and shade one terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Grid side length in samples.
    pub lod: usize,
    /// Rescale the finished grid to exactly [0, 1].
    pub normalize: bool,
    pub noise: NoiseParams,
    pub colors: ColorGradient,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            lod: 256,
            normalize: true,
            noise: NoiseParams::default(),
            colors: ColorGradient::default(),
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.lod == 0 {
            return Err(ParamError::ZeroLod);
        }
        if self.lod > MAX_LOD {
            return Err(ParamError::LodTooLarge(self.lod));
        }
        self.noise.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, ParamError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ParamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// True when both parameter sets yield the same heights (colours aside).
    pub fn same_surface(&self, other: &Self) -> bool {
        self.lod == other.lod && self.normalize == other.normalize && self.noise == other.noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn defaults_are_valid() {
        assert!(TerrainParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_contract_violations() {
        let mut p = TerrainParams { lod: 0, ..TerrainParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::ZeroLod)));

        p.lod = MAX_LOD + 1;
        assert!(matches!(p.validate(), Err(ParamError::LodTooLarge(_))));

        p.lod = 16;
        p.noise.frequency = 0.0;
        assert!(matches!(p.validate(), Err(ParamError::Frequency(_))));

        p.noise.frequency = f64::NAN;
        assert!(matches!(p.validate(), Err(ParamError::Frequency(_))));

        p.noise = NoiseParams { exponent: 0.5, ..NoiseParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::Exponent(_))));

        p.noise = NoiseParams { octaves: 11, ..NoiseParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::Octaves(11))));

        p.noise = NoiseParams { octaves: 0, ..NoiseParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::Octaves(0))));

        p.noise = NoiseParams { amplitude_step: -0.5, ..NoiseParams::default() };
        assert!(matches!(p.validate(), Err(ParamError::AmplitudeStep(_))));
    }

    #[test]
    fn partial_json_fills_from_defaults() {
        let p = TerrainParams::from_json(r#"{ "lod": 64, "noise": { "seed": 9 } }"#).unwrap();
        assert_eq!(p.lod, 64);
        assert_eq!(p.noise.seed, 9);
        assert_eq!(p.noise.octaves, NoiseParams::default().octaves);
        assert!(p.normalize);
    }

    #[test]
    fn json_rejects_invalid_values() {
        assert!(matches!(TerrainParams::from_json(r#"{ "lod": 0 }"#), Err(ParamError::ZeroLod)));
        assert!(matches!(TerrainParams::from_json("not json"), Err(ParamError::Json(_))));
    }

    #[test]
    fn json_survives_a_round_trip() {
        let p = TerrainParams::default();
        let back = TerrainParams::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn randomized_params_always_validate() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = NoiseParams::default();
        for _ in 0..200 {
            p.randomize(&mut rng);
            assert!(p.validate().is_ok(), "{p:?}");
            assert!(p.amplitude_step >= 0.5);
        }
    }
}
