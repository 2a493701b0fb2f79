//! Base noise source and octave layering.
//!
//! The synthesizer only needs a 2D `NoiseFn` returning values in roughly
//! [-1, 1]. Production runs use a seeded simplex source; tests plug in
//! `noise::Constant` and friends.

pub mod amplitude;
pub mod octave;

pub use amplitude::{build_amplitude_schedule, AmplitudeSchedule};
pub use octave::sample_noise;

use noise::Simplex;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Deterministic simplex source for `seed`.
///
/// The user-facing seed is 64-bit while the simplex permutation table takes a
/// `u32`; a seeded PRNG folds one into the other so neighbouring seeds still
/// give unrelated terrain.
pub fn seeded_source(seed: u64) -> Simplex {
    let mut rng = StdRng::seed_from_u64(seed);
    Simplex::new(rng.gen())
}
