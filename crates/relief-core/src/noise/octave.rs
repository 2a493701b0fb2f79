use noise::NoiseFn;

use super::AmplitudeSchedule;

/// Weighted octave mean at `(x, y)`, raised to `exponent`.
///
/// Each base sample is remapped from [-1, 1] to [0, 1] via `v / 2 + 0.5`
/// before weighting by `1 / a`. Sources that overshoot [-1, 1] are saturated
/// (clamped to the nearest bound), not mapped linearly, so the mean and hence
/// the result (for `exponent >= 1`) always lie in [0, 1].
pub fn sample_noise<N>(
    x: f64,
    y: f64,
    schedule: &AmplitudeSchedule,
    exponent: f64,
    source: &N,
) -> f64
where
    N: NoiseFn<f64, 2> + ?Sized,
{
    let mut sum = 0.0f64;
    let mut weight = 0.0f64;
    for &a in schedule.iter() {
        let v = source.get([x * a, y * a]).clamp(-1.0, 1.0);
        let w = 1.0 / a;
        sum += (v / 2.0 + 0.5) * w;
        weight += w;
    }
    (sum / weight).powf(exponent)
}
