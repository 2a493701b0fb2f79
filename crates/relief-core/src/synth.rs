//! Heightmap synthesis: octave noise over a square grid, then optional
//! min-max normalisation.
//!
//! Pure and single-shot. The only state carried between calls is the seeded
//! source inside [`HeightmapSynthesizer`].

use ::noise::{NoiseFn, Simplex};

use crate::error::ParamError;
use crate::heightgrid::HeightGrid;
use crate::noise::{build_amplitude_schedule, sample_noise, seeded_source, AmplitudeSchedule};
use crate::normalize::normalise_in_place;
use crate::params::{TerrainParams, MAX_LOD};

/// Sample `lod × lod` cells of octave noise.
///
/// Cell `(x, y)` is evaluated at `(x, y) / (lod / frequency)`, i.e. the grid
/// spans `frequency` noise units on each axis. With `normalize` the result is
/// rescaled to exactly [0, 1] (a constant field becomes all zeros).
///
/// Rejects `lod == 0`, `lod > MAX_LOD`, a non-finite or sub-unit
/// `frequency` or `exponent`, and any non-finite or non-positive octave
/// amplitude before any sampling.
pub fn generate<N>(
    lod: usize,
    frequency: f64,
    exponent: f64,
    schedule: &AmplitudeSchedule,
    normalize: bool,
    source: &N,
) -> Result<HeightGrid, ParamError>
where
    N: NoiseFn<f64, 2> + Sync + ?Sized,
{
    if lod == 0 {
        return Err(ParamError::ZeroLod);
    }
    if lod > MAX_LOD {
        return Err(ParamError::LodTooLarge(lod));
    }
    if !frequency.is_finite() || frequency < 1.0 {
        return Err(ParamError::Frequency(frequency));
    }
    if !exponent.is_finite() || exponent < 1.0 {
        return Err(ParamError::Exponent(exponent));
    }
    if let Some(&a) = schedule.iter().find(|a| !a.is_finite() || **a <= 0.0) {
        return Err(ParamError::Amplitude(a));
    }

    let cells_per_unit = lod as f64 / frequency;
    let fill_row = |y: usize, row: &mut [f32]| {
        let ny = y as f64 / cells_per_unit;
        for (x, cell) in row.iter_mut().enumerate() {
            let nx = x as f64 / cells_per_unit;
            *cell = sample_noise(nx, ny, schedule, exponent, source) as f32;
        }
    };

    let mut data = vec![0.0f32; lod * lod];

    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(lod)
            .enumerate()
            .for_each(|(y, row)| fill_row(y, row));
    }
    #[cfg(not(feature = "threading"))]
    {
        for (y, row) in data.chunks_mut(lod).enumerate() {
            fill_row(y, row);
        }
    }

    if normalize {
        normalise_in_place(&mut data, 0.0, 1.0);
    }

    log::debug!(
        "synthesized {lod}x{lod} heightmap, {} octaves, normalize={normalize}",
        schedule.len(),
    );

    Ok(HeightGrid { lod, data })
}

/// Validated parameters bound to their seeded simplex source.
pub struct HeightmapSynthesizer {
    params: TerrainParams,
    schedule: AmplitudeSchedule,
    source: Simplex,
}

impl HeightmapSynthesizer {
    pub fn new(params: &TerrainParams) -> Result<Self, ParamError> {
        params.validate()?;
        let noise = &params.noise;
        Ok(Self {
            params: params.clone(),
            schedule: build_amplitude_schedule(noise.octaves, noise.amplitude_step),
            source: seeded_source(noise.seed),
        })
    }

    pub fn synthesize(&self) -> Result<HeightGrid, ParamError> {
        let p = &self.params;
        generate(
            p.lod,
            p.noise.frequency,
            p.noise.exponent,
            &self.schedule,
            p.normalize,
            &self.source,
        )
    }
}
