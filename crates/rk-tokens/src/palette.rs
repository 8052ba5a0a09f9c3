//! Palette entries supplied by the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// One named base color.
///
/// `hex` is kept as the caller wrote it; normalization happens when the
/// ramp is generated, so one malformed entry never rejects the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Slug, unique within the palette. Appears in primitive token names.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Base color.
    pub hex: String,
}

impl PaletteColor {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hex: hex.into(),
        }
    }
}

/// Whether `id` is a lowercase slug: `[a-z0-9]` runs joined by single dashes.
#[must_use]
pub fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// Check that every id is a slug and that no id repeats.
///
/// # Errors
///
/// [`TokenError::InvalidId`] or [`TokenError::DuplicateId`] for the first
/// offending entry.
pub fn validate_palette(palette: &[PaletteColor]) -> Result<(), TokenError> {
    let mut seen = HashSet::with_capacity(palette.len());
    for color in palette {
        if !is_slug(&color.id) {
            return Err(TokenError::InvalidId { id: color.id.clone() });
        }
        if !seen.insert(color.id.as_str()) {
            return Err(TokenError::DuplicateId { id: color.id.clone() });
        }
    }
    Ok(())
}
