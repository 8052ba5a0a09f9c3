// SPDX-License-Identifier: MIT
//
// Palette configuration files.
//
//   stops = "figma"            # optional, "figma" (default) or "even"
//
//   [[palette]]
//   id = "deep-blue"
//   label = "Deep Blue"
//   hex = "#1c2e7a"
//
//   [mapping.light]
//   surfacePrimary = "slate"
//   ...                        # all six roles, for both themes
//
//   [mapping.dark]
//   ...

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use rk_ramp::StopSet;
use rk_tokens::builtin::builtin_preset;
use rk_tokens::palette::validate_palette;
use rk_tokens::{Mapping, PaletteColor};

/// Everything needed to build a token bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub stops: StopSet,
    pub palette: Vec<PaletteColor>,
    pub mapping: Mapping,
}

impl Config {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        log::info!(
            "loaded {} palette colors from {}",
            config.palette.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    /// A builtin preset with the default stop set.
    pub fn preset(name: &str) -> Result<Self> {
        let Some(preset) = builtin_preset(name) else {
            bail!(
                "unknown preset {name:?} (available: {})",
                rk_tokens::builtin::builtin_names().join(", ")
            );
        };
        Ok(Self {
            stops: StopSet::default(),
            palette: preset.palette,
            mapping: preset.mapping,
        })
    }

    /// Palette ids must be unique slugs and every mapped role must name one.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            bail!("palette is empty");
        }
        validate_palette(&self.palette)?;
        self.mapping.validate(&self.palette)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r##"
stops = "even"

[[palette]]
id = "ink"
label = "Deep Blue"
hex = "#1c2e7a"

[[palette]]
id = "coral"
label = "Coral"
hex = "#e4572e"

[mapping.light]
surfacePrimary = "ink"
surfaceInverse = "ink"
textPrimary = "ink"
textInverse = "ink"
accentPrimary = "coral"
accentInverse = "coral"

[mapping.dark]
surfacePrimary = "ink"
surfaceInverse = "ink"
textPrimary = "ink"
textInverse = "ink"
accentPrimary = "coral"
accentInverse = "ink"
"##;

    #[test]
    fn parses_sample() {
        let config = Config::parse(SAMPLE).unwrap();
        assert_eq!(config.stops, StopSet::Even);
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.palette[0].label, "Deep Blue");
        assert_eq!(config.mapping.dark.accent_inverse, "ink");
    }

    #[test]
    fn stops_default_to_figma() {
        let text = SAMPLE.replace("stops = \"even\"", "");
        assert_eq!(Config::parse(&text).unwrap().stops, StopSet::Figma);
    }

    #[test]
    fn dangling_mapping_is_rejected() {
        let text = SAMPLE.replace("accentInverse = \"ink\"", "accentInverse = \"ghost\"");
        let err = Config::parse(&text).unwrap_err();
        assert!(format!("{err:#}").contains("ghost"), "{err:#}");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = format!("theme = \"dark\"\n{SAMPLE}");
        assert!(Config::parse(&text).is_err());
    }

    #[test]
    fn demo_config_parses() {
        let config = Config::parse(include_str!("../demos/palette.toml")).unwrap();
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.mapping.light.accent_primary, "deep-blue");
    }

    #[test]
    fn presets_load() {
        let config = Config::preset("default").unwrap();
        assert_eq!(config.stops, StopSet::Figma);
        assert!(config.validate().is_ok());
        assert!(Config::preset("missing").is_err());
    }
}
