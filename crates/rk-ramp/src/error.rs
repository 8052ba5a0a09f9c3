use rk_color::ColorError;
use thiserror::Error;

use crate::step::Step;

/// Why a ramp could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RampError {
    /// The base color did not parse.
    #[error("invalid base color {input:?}")]
    InvalidColor {
        input: String,
        #[source]
        source: ColorError,
    },

    /// A sampled step could not be gamut-mapped or serialized.
    #[error("ramp step {step} failed to convert")]
    ConversionFailed {
        step: Step,
        #[source]
        source: ColorError,
    },
}
