//! Themes, roles and the per-theme role → palette id mapping.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::palette::PaletteColor;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Emission order for CSS blocks and JSON objects.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Value of the `data-theme` attribute and the JSON key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A slot in a theme mapping. Each role feeds several semantic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SurfacePrimary,
    SurfaceInverse,
    TextPrimary,
    TextInverse,
    AccentPrimary,
    AccentInverse,
}

impl Role {
    pub const ALL: [Self; 6] = [
        Self::SurfacePrimary,
        Self::SurfaceInverse,
        Self::TextPrimary,
        Self::TextInverse,
        Self::AccentPrimary,
        Self::AccentInverse,
    ];

    /// The field name used in config files and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SurfacePrimary => "surfacePrimary",
            Self::SurfaceInverse => "surfaceInverse",
            Self::TextPrimary => "textPrimary",
            Self::TextInverse => "textInverse",
            Self::AccentPrimary => "accentPrimary",
            Self::AccentInverse => "accentInverse",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ThemeMapping / Mapping
// ---------------------------------------------------------------------------

/// Palette id for each role within one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMapping {
    pub surface_primary: String,
    pub surface_inverse: String,
    pub text_primary: String,
    pub text_inverse: String,
    pub accent_primary: String,
    pub accent_inverse: String,
}

impl ThemeMapping {
    /// Map every role to the same palette id.
    #[must_use]
    pub fn uniform(id: &str) -> Self {
        Self {
            surface_primary: id.to_owned(),
            surface_inverse: id.to_owned(),
            text_primary: id.to_owned(),
            text_inverse: id.to_owned(),
            accent_primary: id.to_owned(),
            accent_inverse: id.to_owned(),
        }
    }

    /// The palette id assigned to `role`.
    #[must_use]
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::SurfacePrimary => &self.surface_primary,
            Role::SurfaceInverse => &self.surface_inverse,
            Role::TextPrimary => &self.text_primary,
            Role::TextInverse => &self.text_inverse,
            Role::AccentPrimary => &self.accent_primary,
            Role::AccentInverse => &self.accent_inverse,
        }
    }
}

/// Role assignments for both themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub light: ThemeMapping,
    pub dark: ThemeMapping,
}

impl Mapping {
    #[must_use]
    pub const fn get(&self, theme: Theme) -> &ThemeMapping {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Check that every role in both themes names a palette id.
    ///
    /// # Errors
    ///
    /// [`TokenError::UnknownId`] for the first dangling role, light theme
    /// first.
    pub fn validate(&self, palette: &[PaletteColor]) -> Result<(), TokenError> {
        let ids: HashSet<&str> = palette.iter().map(|c| c.id.as_str()).collect();
        for theme in Theme::ALL {
            let mapping = self.get(theme);
            for role in Role::ALL {
                let id = mapping.get(role);
                if !ids.contains(id) {
                    return Err(TokenError::UnknownId {
                        theme,
                        role,
                        id: id.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}
