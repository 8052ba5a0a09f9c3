//! Builtin palettes, each paired with a light/dark role mapping.
//!
//! Each preset pairs a neutral for surfaces and text with one or two
//! accents, swapping the accents between light and dark so the brighter
//! one lands on the dark surface.

use crate::mapping::{Mapping, ThemeMapping};
use crate::palette::PaletteColor;

/// A palette and the mapping that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub palette: Vec<PaletteColor>,
    pub mapping: Mapping,
}

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<Preset> {
    Some(match name {
        "default" => neutral_with_accents(
            "default",
            ("slate", "Slate", "#64748b"),
            ("deep-blue", "Deep Blue", "#1c2e7a"),
            ("coral", "Coral", "#e4572e"),
        ),
        "forest" => neutral_with_accents(
            "forest",
            ("stone", "Stone", "#78716c"),
            ("pine", "Pine", "#276738"),
            ("amber", "Amber", "#f5a623"),
        ),
        "mono" => Preset {
            name: "mono",
            palette: vec![
                PaletteColor::new("gray", "Gray", "#808080"),
                PaletteColor::new("ink", "Ink", "#404040"),
            ],
            mapping: Mapping {
                // Mid gray is too close to its own 100 step to carry the light accent.
                light: ThemeMapping {
                    accent_primary: "ink".to_owned(),
                    ..ThemeMapping::uniform("gray")
                },
                dark: ThemeMapping {
                    accent_inverse: "ink".to_owned(),
                    ..ThemeMapping::uniform("gray")
                },
            },
        },
        _ => return None,
    })
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "forest", "mono"]
}

type Entry = (&'static str, &'static str, &'static str);

fn neutral_with_accents(name: &'static str, neutral: Entry, light_accent: Entry, dark_accent: Entry) -> Preset {
    let theme = |accent: &str, inverse: &str| ThemeMapping {
        accent_primary: accent.to_owned(),
        accent_inverse: inverse.to_owned(),
        ..ThemeMapping::uniform(neutral.0)
    };

    Preset {
        name,
        palette: [neutral, light_accent, dark_accent]
            .into_iter()
            .map(|(id, label, hex)| PaletteColor::new(id, label, hex))
            .collect(),
        mapping: Mapping {
            light: theme(light_accent.0, dark_accent.0),
            dark: theme(dark_accent.0, light_accent.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::validate_palette;

    #[test]
    fn every_listed_name_resolves() {
        for name in builtin_names() {
            let preset = builtin_preset(name).unwrap();
            assert_eq!(preset.name, *name);
        }
        assert!(builtin_preset("nope").is_none());
    }

    #[test]
    fn presets_are_self_consistent() {
        for name in builtin_names() {
            let preset = builtin_preset(name).unwrap();
            assert_eq!(validate_palette(&preset.palette), Ok(()), "{name}");
            assert_eq!(preset.mapping.validate(&preset.palette), Ok(()), "{name}");
        }
    }

    #[test]
    fn default_uses_deep_blue_in_light() {
        let preset = builtin_preset("default").unwrap();
        assert_eq!(preset.mapping.light.accent_primary, "deep-blue");
        assert_eq!(preset.mapping.dark.accent_primary, "coral");
        assert!(preset.palette.iter().any(|c| c.hex == "#1c2e7a"));
    }
}
