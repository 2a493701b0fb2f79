//! Regeneration trigger for whatever drives the viewer (control panel,
//! randomise timer, CLI).
//!
//! The controller owns the live parameters and the last grid. Commands that
//! leave the surface unchanged (including colour-only edits) skip synthesis;
//! rejected parameters leave the previous state in place.

use rand::{rngs::StdRng, SeedableRng};

use crate::error::ParamError;
use crate::heightgrid::HeightGrid;
use crate::params::TerrainParams;
use crate::synth::HeightmapSynthesizer;

#[derive(Debug, Clone)]
pub enum Command {
    /// Replace only the noise seed.
    SetSeed(u64),
    /// Replace the whole parameter set.
    SetParams(TerrainParams),
    /// Draw new noise parameters from a PRNG seeded with the given value.
    Randomize(u64),
    /// Re-run synthesis even if nothing changed.
    Regenerate,
}

#[derive(Debug, Clone)]
pub struct TerrainController {
    params: TerrainParams,
    grid: Option<HeightGrid>,
}

impl TerrainController {
    pub fn new(params: TerrainParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params, grid: None })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn grid(&self) -> Option<&HeightGrid> {
        self.grid.as_ref()
    }

    /// Apply `cmd`. Returns the new grid when one was synthesized, `None`
    /// when the current grid is still up to date.
    pub fn apply(&mut self, cmd: Command) -> Result<Option<&HeightGrid>, ParamError> {
        let force = matches!(cmd, Command::Regenerate);
        let next = match cmd {
            Command::SetSeed(seed) => {
                let mut p = self.params.clone();
                p.noise.seed = seed;
                p
            }
            Command::SetParams(p) => p,
            Command::Randomize(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut p = self.params.clone();
                p.noise.randomize(&mut rng);
                p
            }
            Command::Regenerate => self.params.clone(),
        };
        next.validate()?;

        if !force && self.grid.is_some() && next.same_surface(&self.params) {
            self.params = next;
            return Ok(None);
        }

        let grid = HeightmapSynthesizer::new(&next)?.synthesize()?;
        log::debug!("regenerated terrain for seed {}", next.noise.seed);
        self.params = next;
        self.grid = Some(grid);
        Ok(self.grid.as_ref())
    }
}
