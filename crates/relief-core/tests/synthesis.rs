//! End-to-end properties of heightmap synthesis across parameter sweeps.

use noise::{Constant, NoiseFn};
use relief_core::noise::{build_amplitude_schedule, seeded_source};
use relief_core::raster::to_luma8;
use relief_core::{generate, HeightmapSynthesizer, NoiseParams, TerrainParams};

/// Checkerboard-ish source with a known, non-constant pattern.
struct Stripes;

impl NoiseFn<f64, 2> for Stripes {
    fn get(&self, point: [f64; 2]) -> f64 {
        (point[0] * 3.1).sin() * (point[1] * 1.7).cos()
    }
}

#[test]
fn output_length_and_finiteness_across_sweep() {
    let source = seeded_source(3);
    for lod in [1usize, 2, 7, 32] {
        for octaves in [1u32, 4, 10] {
            for frequency in [1.0, 3.5, 12.0] {
                for exponent in [1.0, 2.0, 4.5] {
                    let schedule = build_amplitude_schedule(octaves, 1.5);
                    for normalize in [false, true] {
                        let grid =
                            generate(lod, frequency, exponent, &schedule, normalize, &source)
                                .unwrap();
                        assert_eq!(grid.len(), lod * lod);
                        assert!(grid.data.iter().all(|v| v.is_finite()));
                        assert!(grid.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
                    }
                }
            }
        }
    }
}

#[test]
fn normalized_output_hits_both_bounds_exactly() {
    let schedule = build_amplitude_schedule(5, 2.0);
    let grid = generate(24, 2.0, 3.0, &schedule, true, &Stripes).unwrap();
    assert_eq!(grid.min_value(), 0.0);
    assert_eq!(grid.max_value(), 1.0);
}

#[test]
fn identical_seed_and_params_are_bit_identical() {
    let params = TerrainParams {
        lod: 40,
        normalize: false,
        noise: NoiseParams { seed: 0xDEAD_BEEF, ..NoiseParams::default() },
        ..TerrainParams::default()
    };
    let a = HeightmapSynthesizer::new(&params).unwrap().synthesize().unwrap();
    let b = HeightmapSynthesizer::new(&params).unwrap().synthesize().unwrap();
    let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.data), bits(&b.data));
}

#[test]
fn different_seeds_give_different_terrain() {
    let mut params = TerrainParams { lod: 32, ..TerrainParams::default() };
    let a = HeightmapSynthesizer::new(&params).unwrap().synthesize().unwrap();
    params.noise.seed = 1;
    let b = HeightmapSynthesizer::new(&params).unwrap().synthesize().unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn known_constant_grid() {
    // lod 2, frequency 1, schedule [1], exponent 1: every cell is c/2 + 0.5.
    let schedule = build_amplitude_schedule(1, 0.0);
    for c in [-0.5f64, 0.0, 0.8] {
        let grid = generate(2, 1.0, 1.0, &schedule, false, &Constant::new(c)).unwrap();
        let expected = (c / 2.0 + 0.5) as f32;
        assert_eq!(grid.data, vec![expected; 4]);
    }
}

#[test]
fn first_row_and_column_follow_noise_space_mapping() {
    // Source returns x, so cell (x, 0) samples x / (lod / frequency).
    struct X;
    impl NoiseFn<f64, 2> for X {
        fn get(&self, point: [f64; 2]) -> f64 {
            point[0]
        }
    }
    let schedule = build_amplitude_schedule(1, 0.0);
    let grid = generate(4, 2.0, 1.0, &schedule, false, &X).unwrap();
    for x in 0..4 {
        let nx = x as f64 / 2.0;
        let expected = (nx.clamp(-1.0, 1.0) / 2.0 + 0.5) as f32;
        assert_eq!(grid.get(x, 0), expected);
        assert_eq!(grid.get(x, 3), expected);
    }
}

#[test]
fn raster_matches_grid_size() {
    let params = TerrainParams { lod: 20, ..TerrainParams::default() };
    let grid = HeightmapSynthesizer::new(&params).unwrap().synthesize().unwrap();
    let px = to_luma8(&grid);
    assert_eq!(px.len(), 400);
    assert!(px.contains(&0) && px.contains(&255));
}
