//! Linear min-max rescaling.
//!
//! A constant (or empty) input has no spread to rescale; every element maps
//! to the lower bound `min` instead of dividing by zero.

/// Rescale `values` so the smallest maps to `min` and the largest to `max`.
pub fn normalise_between(values: &[f32], min: f32, max: f32) -> Vec<f32> {
    let mut out = values.to_vec();
    normalise_in_place(&mut out, min, max);
    out
}

/// In-place form of [`normalise_between`].
pub fn normalise_in_place(values: &mut [f32], min: f32, max: f32) {
    let amin = values.iter().cloned().fold(f32::INFINITY, f32::min);
    let amax = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = amax - amin;
    if !range.is_finite() || range <= 0.0 {
        values.fill(min);
        return;
    }
    for v in values.iter_mut() {
        let t = (*v - amin) / range;
        // Endpoint-exact lerp: t == 0 gives `min`, t == 1 gives `max`.
        *v = min * (1.0 - t) + max * t;
    }
}
