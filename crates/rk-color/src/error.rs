// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures produced while parsing or converting colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a recognized color representation.
    #[error("invalid color: {input:?}")]
    InvalidColor { input: String },

    /// Gamut mapping or sRGB conversion produced a non-finite component.
    #[error("cannot convert {point} to sRGB")]
    ConversionFailed { point: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColor {
            input: input.to_owned(),
        }
    }
}
