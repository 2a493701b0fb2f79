//! Per-octave amplitude multipliers.
//!
//! Octave `i` samples the base source at coordinates scaled by `a[i]` and is
//! weighted by `1 / a[i]`, so larger amplitudes mean finer, fainter detail.

/// Ordered octave amplitudes: `a[0] = 1`, `a[i] = a[i-1] + step`.
/// Always holds at least one amplitude. A negative or non-finite step can
/// produce zero, negative or NaN entries; `generate` rejects those.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeSchedule(Vec<f64>);

impl AmplitudeSchedule {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Build the schedule for `octaves` layers. `octaves == 0` is treated as 1.
pub fn build_amplitude_schedule(octaves: u32, amplitude_step: f64) -> AmplitudeSchedule {
    let n = octaves.max(1) as usize;
    let mut amps = Vec::with_capacity(n);
    let mut a = 1.0f64;
    amps.push(a);
    for _ in 1..n {
        a += amplitude_step;
        amps.push(a);
    }
    AmplitudeSchedule(amps)
}
