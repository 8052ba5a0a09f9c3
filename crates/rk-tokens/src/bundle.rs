//! Token bundle construction and serialization.

use std::collections::BTreeMap;
use std::fmt;

use rk_color::HexColor;
use rk_ramp::{Ramp, Step};
use serde_json::{Map, Value, json};

use crate::error::TokenError;
use crate::mapping::{Mapping, Theme};
use crate::palette::PaletteColor;
use crate::slots::{COMPONENT_SLOTS, ComponentValue, Semantic};

/// CSS custom property name of a primitive: `--c-<id>-<step>`.
#[must_use]
pub fn primitive_name(id: &str, step: Step) -> String {
    format!("--c-{id}-{step}")
}

// ---------------------------------------------------------------------------
// TokenValue
// ---------------------------------------------------------------------------

/// The value of a semantic or component token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Reference to a primitive, by its property name.
    Ref(String),
    /// A literal CSS value such as `transparent`.
    Literal(&'static str),
}

impl TokenValue {
    /// The JSON form: the primitive name itself, or the literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ref(name) => name,
            Self::Literal(value) => value,
        }
    }
}

/// The CSS form: `var(--c-…)` or the literal.
impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(name) => write!(f, "var({name})"),
            Self::Literal(value) => f.write_str(value),
        }
    }
}

// ---------------------------------------------------------------------------
// TokenBundle
// ---------------------------------------------------------------------------

/// Semantic and component tokens for one theme, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTokens {
    pub semantic: Vec<(String, TokenValue)>,
    pub component: Vec<(String, TokenValue)>,
}

impl ThemeTokens {
    /// Look up a semantic or component token by property name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&TokenValue> {
        self.semantic
            .iter()
            .chain(&self.component)
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }
}

/// Everything a build produces. Read-only; rebuilt from scratch each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBundle {
    primitives: BTreeMap<String, HexColor>,
    light: ThemeTokens,
    dark: ThemeTokens,
}

impl TokenBundle {
    /// Primitive name → color, sorted by name.
    #[must_use]
    pub const fn primitives(&self) -> &BTreeMap<String, HexColor> {
        &self.primitives
    }

    #[must_use]
    pub const fn theme(&self, theme: Theme) -> &ThemeTokens {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Follow a themed token to the color it ends up as.
    ///
    /// Returns `None` for unknown names and for literal values.
    #[must_use]
    pub fn resolve(&self, theme: Theme, property: &str) -> Option<&HexColor> {
        match self.theme(theme).get(property)? {
            TokenValue::Ref(name) => self.primitives.get(name),
            TokenValue::Literal(_) => None,
        }
    }

    /// Render as a stylesheet: a `:root` block of primitives followed by
    /// one `[data-theme="…"]` block per theme.
    #[must_use]
    pub fn css(&self) -> String {
        Css(self).to_string()
    }

    /// Render as a JSON tree with `primitives`, `themes` and `components`.
    ///
    /// Semantic and component values are primitive names, not colors, so
    /// the reference structure survives.
    #[must_use]
    pub fn json(&self) -> Value {
        let primitives: Map<String, Value> = self
            .primitives
            .iter()
            .map(|(name, hex)| (name.clone(), Value::from(hex.as_str())))
            .collect();

        let mut themes = Map::new();
        let mut components = Map::new();
        for theme in Theme::ALL {
            let tokens = self.theme(theme);
            themes.insert(theme.name().to_owned(), Value::Object(to_json_map(&tokens.semantic)));
            components.insert(theme.name().to_owned(), Value::Object(to_json_map(&tokens.component)));
        }

        json!({
            "primitives": primitives,
            "themes": themes,
            "components": components,
        })
    }
}

fn to_json_map(tokens: &[(String, TokenValue)]) -> Map<String, Value> {
    tokens
        .iter()
        .map(|(name, value)| (name.clone(), Value::from(value.as_str())))
        .collect()
}

struct Css<'a>(&'a TokenBundle);

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bundle = self.0;

        writeln!(f, ":root {{")?;
        for (name, hex) in &bundle.primitives {
            writeln!(f, "  {name}: {hex};")?;
        }
        writeln!(f, "}}")?;

        for theme in Theme::ALL {
            let tokens = bundle.theme(theme);
            writeln!(f)?;
            writeln!(f, "[data-theme=\"{theme}\"] {{")?;
            for (name, value) in tokens.semantic.iter().chain(&tokens.component) {
                writeln!(f, "  {name}: {value};")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

/// Build the token bundle for a palette.
///
/// `ramps` is keyed by palette id, as produced by
/// [`rk_ramp::generate_ramps`]. Palette entries without a ramp contribute
/// no primitives; that is only an error if a mapped role points at one of
/// them.
///
/// # Errors
///
/// [`TokenError::MissingReference`] if any role in either theme names a
/// color with no primitives. Nothing is emitted in that case, so a
/// returned bundle never contains a dangling `var()`.
pub fn build_tokens(
    palette: &[PaletteColor],
    ramps: &BTreeMap<String, Ramp>,
    mapping: &Mapping,
) -> Result<TokenBundle, TokenError> {
    let mut primitives = BTreeMap::new();
    for color in palette {
        let Some(ramp) = ramps.get(&color.id) else {
            log::debug!("no ramp for {:?}; skipping its primitives", color.id);
            continue;
        };
        for (step, hex) in ramp.iter() {
            primitives.insert(primitive_name(&color.id, step), hex.clone());
        }
    }

    let light = build_theme(Theme::Light, mapping, &primitives)?;
    let dark = build_theme(Theme::Dark, mapping, &primitives)?;
    log::debug!(
        "built {} primitives, {} semantic and {} component tokens per theme",
        primitives.len(),
        light.semantic.len(),
        light.component.len()
    );

    Ok(TokenBundle {
        primitives,
        light,
        dark,
    })
}

fn build_theme(
    theme: Theme,
    mapping: &Mapping,
    primitives: &BTreeMap<String, HexColor>,
) -> Result<ThemeTokens, TokenError> {
    let roles = mapping.get(theme);

    // Indexed by `Semantic as usize`, so components can alias by variant.
    let mut resolved: Vec<String> = Vec::with_capacity(Semantic::ALL.len());
    for semantic in Semantic::ALL {
        // Alias targets come earlier in `Semantic::ALL`.
        if let Some(target) = semantic.alias_of() {
            resolved.push(resolved[target as usize].clone());
            continue;
        }
        let (role, step) = semantic.resolve(theme);
        let id = roles.get(role);
        let name = primitive_name(id, step);
        if !primitives.contains_key(&name) {
            return Err(TokenError::MissingReference {
                theme,
                role,
                id: id.to_owned(),
            });
        }
        resolved.push(name);
    }

    let semantic = Semantic::ALL
        .iter()
        .zip(&resolved)
        .map(|(s, name)| (s.property(), TokenValue::Ref(name.clone())))
        .collect();

    let component = COMPONENT_SLOTS
        .iter()
        .map(|slot| {
            let value = match slot.value {
                ComponentValue::Alias(s) => TokenValue::Ref(resolved[s as usize].clone()),
                ComponentValue::Literal(v) => TokenValue::Literal(v),
            };
            (format!("--{}", slot.name), value)
        })
        .collect();

    Ok(ThemeTokens {
        semantic,
        component,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{Role, ThemeMapping};
    use pretty_assertions::assert_eq;
    use rk_ramp::{StopSet, generate_ramp9};

    fn palette() -> Vec<PaletteColor> {
        vec![
            PaletteColor::new("ink", "Deep Blue", "#1c2e7a"),
            PaletteColor::new("coral", "Coral", "#e4572e"),
        ]
    }

    fn ramps(palette: &[PaletteColor]) -> BTreeMap<String, Ramp> {
        palette
            .iter()
            .map(|c| (c.id.clone(), generate_ramp9(&c.hex, StopSet::Figma).unwrap()))
            .collect()
    }

    fn mapping() -> Mapping {
        let mut light = ThemeMapping::uniform("ink");
        light.accent_primary = "coral".into();
        let mut dark = ThemeMapping::uniform("ink");
        dark.accent_primary = "coral".into();
        dark.accent_inverse = "coral".into();
        Mapping { light, dark }
    }

    fn build() -> TokenBundle {
        let palette = palette();
        build_tokens(&palette, &ramps(&palette), &mapping()).unwrap()
    }

    // ── Primitives ───────────────────────────────────────────────────────

    #[test]
    fn one_primitive_per_color_and_step() {
        let bundle = build();
        assert_eq!(bundle.primitives().len(), 18);
        assert_eq!(bundle.primitives()["--c-ink-500"].as_str(), "#1c2e7a");
        assert_eq!(bundle.primitives()["--c-coral-500"].as_str(), "#e4572e");
    }

    #[test]
    fn colors_without_ramps_are_skipped() {
        let mut palette = palette();
        let ramps = ramps(&palette);
        palette.push(PaletteColor::new("spare", "Spare", "#00ff00"));

        let bundle = build_tokens(&palette, &ramps, &mapping()).unwrap();
        assert!(bundle.primitives().keys().all(|k| !k.starts_with("--c-spare-")));
    }

    // ── Semantic layer ───────────────────────────────────────────────────

    #[test]
    fn text_primary_flips_between_themes() {
        let bundle = build();
        assert_eq!(
            bundle.theme(Theme::Light).get("--text-primary"),
            Some(&TokenValue::Ref("--c-ink-900".into()))
        );
        assert_eq!(
            bundle.theme(Theme::Dark).get("--text-primary"),
            Some(&TokenValue::Ref("--c-ink-100".into()))
        );
    }

    #[test]
    fn switching_theme_leaves_primitives_alone() {
        let palette = palette();
        let ramps = ramps(&palette);
        let mapping = mapping();
        let swapped = Mapping {
            light: mapping.dark.clone(),
            dark: mapping.light.clone(),
        };

        let a = build_tokens(&palette, &ramps, &mapping).unwrap();
        let b = build_tokens(&palette, &ramps, &swapped).unwrap();
        assert_eq!(a.primitives(), b.primitives());
    }

    #[test]
    fn links_alias_accents() {
        let bundle = build();
        for theme in Theme::ALL {
            let tokens = bundle.theme(theme);
            assert_eq!(tokens.get("--link"), tokens.get("--accent"));
            assert_eq!(tokens.get("--link-hover"), tokens.get("--accent-hover"));
            assert_eq!(tokens.get("--link-active"), tokens.get("--accent-active"));
        }
        assert_eq!(
            bundle.resolve(Theme::Light, "--link").map(HexColor::as_str),
            Some("#e4572e")
        );
    }

    #[test]
    fn semantic_order_follows_the_table() {
        let bundle = build();
        let names: Vec<&str> = bundle
            .theme(Theme::Light)
            .semantic
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"--surface-primary"));
        assert_eq!(names.last(), Some(&"--link-active"));
        assert_eq!(names.len(), 18);
    }

    // ── Component layer ──────────────────────────────────────────────────

    #[test]
    fn components_alias_semantics() {
        let bundle = build();
        let dark = bundle.theme(Theme::Dark);
        assert_eq!(dark.get("--button-primary-bg"), dark.get("--accent"));
        assert_eq!(dark.get("--input-text"), dark.get("--text-primary"));
        assert_eq!(dark.get("--button-secondary-border-focus"), dark.get("--accent"));
        assert_eq!(
            dark.get("--button-secondary-bg"),
            Some(&TokenValue::Literal("transparent"))
        );
        assert_eq!(bundle.resolve(Theme::Dark, "--button-secondary-bg"), None);
    }

    // ── Errors ───────────────────────────────────────────────────────────

    #[test]
    fn dangling_role_is_a_missing_reference() {
        let palette = palette();
        let mut ramps = ramps(&palette);
        ramps.remove("coral");

        assert_eq!(
            build_tokens(&palette, &ramps, &mapping()),
            Err(TokenError::MissingReference {
                theme: Theme::Light,
                role: Role::AccentPrimary,
                id: "coral".into(),
            })
        );
    }

    #[test]
    fn unknown_id_is_a_missing_reference() {
        let palette = palette();
        let mut mapping = mapping();
        mapping.dark.surface_inverse = "nope".into();

        let err = build_tokens(&palette, &ramps(&palette), &mapping).unwrap_err();
        assert_eq!(
            err,
            TokenError::MissingReference {
                theme: Theme::Dark,
                role: Role::SurfaceInverse,
                id: "nope".into(),
            }
        );
    }

    // ── CSS ──────────────────────────────────────────────────────────────

    #[test]
    fn css_block_structure() {
        let css = build().css();
        let blocks: Vec<&str> = css.lines().filter(|l| l.ends_with('{')).collect();
        assert_eq!(blocks, [":root {", "[data-theme=\"light\"] {", "[data-theme=\"dark\"] {"]);
        assert!(css.contains("  --c-ink-500: #1c2e7a;\n"));
        assert!(css.contains("  --text-primary: var(--c-ink-900);\n"));
        assert!(css.contains("  --button-secondary-bg: transparent;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn css_primitives_are_sorted() {
        let css = build().css();
        let root: Vec<&str> = css
            .lines()
            .skip(1)
            .take_while(|l| *l != "}")
            .collect();
        let mut sorted = root.clone();
        sorted.sort_unstable();
        assert_eq!(root, sorted);
        assert_eq!(root.len(), 18);
    }

    #[test]
    fn every_var_reference_is_declared() {
        let css = build().css();
        let declared: Vec<&str> = css
            .lines()
            .filter_map(|l| l.trim().split_once(':').map(|(name, _)| name))
            .filter(|name| name.starts_with("--c-"))
            .collect();

        let mut references = 0;
        for line in css.lines() {
            if let Some(start) = line.find("var(") {
                let rest = &line[start + 4..];
                let name = &rest[..rest.find(')').unwrap()];
                assert!(declared.contains(&name), "undeclared {name}");
                references += 1;
            }
        }
        assert_eq!(references, 2 * (18 + 36));
    }

    // ── JSON ─────────────────────────────────────────────────────────────

    #[test]
    fn json_mirrors_css_without_var() {
        let bundle = build();
        let json = bundle.json();

        assert_eq!(json["primitives"]["--c-ink-500"], "#1c2e7a");
        assert_eq!(json["themes"]["light"]["--text-primary"], "--c-ink-900");
        assert_eq!(json["themes"]["dark"]["--text-primary"], "--c-ink-100");
        assert_eq!(json["components"]["dark"]["--button-secondary-bg"], "transparent");
        assert_eq!(json["components"]["light"]["--input-border-active"], "--c-coral-500");

        let top: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(top, ["primitives", "themes", "components"]);
        let themes: Vec<&str> = json["themes"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(themes, ["light", "dark"]);
    }

    #[test]
    fn json_preserves_semantic_order() {
        let json = build().json();
        let keys: Vec<&str> = json["themes"]["light"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let expected: Vec<String> = Semantic::ALL.iter().map(|s| s.property()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn builds_are_byte_identical() {
        assert_eq!(build().css(), build().css());
        assert_eq!(build().json(), build().json());
    }
}
