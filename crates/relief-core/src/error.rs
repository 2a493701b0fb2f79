use thiserror::Error;

/// Rejections raised before any synthesis work starts.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("level of detail must be at least 1")]
    ZeroLod,
    #[error("level of detail {0} exceeds the maximum of {max}", max = crate::params::MAX_LOD)]
    LodTooLarge(usize),
    #[error("frequency must be a finite number >= 1, got {0}")]
    Frequency(f64),
    #[error("exponent must be a finite number >= 1, got {0}")]
    Exponent(f64),
    #[error("octave count must lie in [1, {max}], got {0}", max = crate::params::MAX_OCTAVES)]
    Octaves(u32),
    #[error("amplitude step must be a finite number >= 0, got {0}")]
    AmplitudeStep(f64),
    #[error("octave amplitudes must be finite and positive, got {0}")]
    Amplitude(f64),
    #[error("invalid colour {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    Color(String),
    #[error("invalid parameter document: {0}")]
    Json(#[from] serde_json::Error),
}
