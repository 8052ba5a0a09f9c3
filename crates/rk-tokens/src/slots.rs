//! The fixed semantic and component token tables.
//!
//! Downstream stylesheets bind to these names, so the tables are part of
//! the public contract: names and order must not change.

use rk_ramp::Step;

use crate::mapping::{Role, Theme};

// ---------------------------------------------------------------------------
// Semantic tokens
// ---------------------------------------------------------------------------

/// A semantic token: a named role that references one primitive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantic {
    SurfacePrimary,
    SurfaceSecondary,
    SurfaceInverse,
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextDisabled,
    TextInverse,
    BorderDefault,
    BorderStrong,
    BorderSubtle,
    Accent,
    AccentHover,
    AccentActive,
    AccentInverse,
    Link,
    LinkHover,
    LinkActive,
}

impl Semantic {
    /// Emission order.
    pub const ALL: [Self; 18] = [
        Self::SurfacePrimary,
        Self::SurfaceSecondary,
        Self::SurfaceInverse,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextMuted,
        Self::TextDisabled,
        Self::TextInverse,
        Self::BorderDefault,
        Self::BorderStrong,
        Self::BorderSubtle,
        Self::Accent,
        Self::AccentHover,
        Self::AccentActive,
        Self::AccentInverse,
        Self::Link,
        Self::LinkHover,
        Self::LinkActive,
    ];

    /// Token name without the leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SurfacePrimary => "surface-primary",
            Self::SurfaceSecondary => "surface-secondary",
            Self::SurfaceInverse => "surface-inverse",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextMuted => "text-muted",
            Self::TextDisabled => "text-disabled",
            Self::TextInverse => "text-inverse",
            Self::BorderDefault => "border-default",
            Self::BorderStrong => "border-strong",
            Self::BorderSubtle => "border-subtle",
            Self::Accent => "accent",
            Self::AccentHover => "accent-hover",
            Self::AccentActive => "accent-active",
            Self::AccentInverse => "accent-inverse",
            Self::Link => "link",
            Self::LinkHover => "link-hover",
            Self::LinkActive => "link-active",
        }
    }

    /// The CSS custom property name, e.g. `--text-primary`.
    #[must_use]
    pub fn property(self) -> String {
        format!("--{}", self.name())
    }

    /// The token this one is an alias of, if any.
    #[must_use]
    pub const fn alias_of(self) -> Option<Self> {
        match self {
            Self::Link => Some(Self::Accent),
            Self::LinkHover => Some(Self::AccentHover),
            Self::LinkActive => Some(Self::AccentActive),
            _ => None,
        }
    }

    /// Role and `(light, dark)` steps this token resolves to.
    ///
    /// Light and dark mirror each other around the middle of the ramp;
    /// accents keep the same step in both themes.
    #[must_use]
    pub const fn source(self) -> (Role, Step, Step) {
        use Step::{S100, S200, S300, S400, S500, S600, S700, S800, S900};

        match self {
            Self::SurfacePrimary => (Role::SurfacePrimary, S100, S900),
            Self::SurfaceSecondary => (Role::SurfacePrimary, S200, S800),
            Self::SurfaceInverse => (Role::SurfaceInverse, S900, S100),
            Self::TextPrimary => (Role::TextPrimary, S900, S100),
            Self::TextSecondary => (Role::TextPrimary, S700, S200),
            Self::TextMuted => (Role::TextPrimary, S600, S400),
            Self::TextDisabled => (Role::TextPrimary, S400, S500),
            Self::TextInverse => (Role::TextInverse, S100, S900),
            Self::BorderDefault => (Role::TextPrimary, S300, S700),
            Self::BorderStrong => (Role::TextPrimary, S400, S600),
            Self::BorderSubtle => (Role::TextPrimary, S200, S800),
            Self::Accent | Self::Link => (Role::AccentPrimary, S500, S500),
            Self::AccentHover | Self::LinkHover => (Role::AccentPrimary, S600, S600),
            Self::AccentActive | Self::LinkActive => (Role::AccentPrimary, S700, S700),
            Self::AccentInverse => (Role::AccentInverse, S500, S500),
        }
    }

    /// Role and step for one theme.
    #[must_use]
    pub const fn resolve(self, theme: Theme) -> (Role, Step) {
        let (role, light, dark) = self.source();
        match theme {
            Theme::Light => (role, light),
            Theme::Dark => (role, dark),
        }
    }
}

// ---------------------------------------------------------------------------
// Component tokens
// ---------------------------------------------------------------------------

/// Where a component token gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentValue {
    /// Same reference as a semantic token.
    Alias(Semantic),
    /// A literal CSS value, emitted verbatim.
    Literal(&'static str),
}

/// A widget-scoped token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSlot {
    /// Token name without the leading `--`.
    pub name: &'static str,
    pub value: ComponentValue,
}

const fn alias(name: &'static str, semantic: Semantic) -> ComponentSlot {
    ComponentSlot {
        name,
        value: ComponentValue::Alias(semantic),
    }
}

const fn literal(name: &'static str, value: &'static str) -> ComponentSlot {
    ComponentSlot {
        name,
        value: ComponentValue::Literal(value),
    }
}

/// CSS keyword for a see-through background.
pub const TRANSPARENT: &str = "transparent";

/// Every component token, in emission order: primary button, secondary
/// button, text input.
pub const COMPONENT_SLOTS: &[ComponentSlot] = &[
    // ── Primary button ────────────────────────────────────────
    alias("button-primary-bg", Semantic::Accent),
    alias("button-primary-bg-hover", Semantic::AccentHover),
    alias("button-primary-bg-active", Semantic::AccentActive),
    alias("button-primary-bg-disabled", Semantic::BorderSubtle),
    alias("button-primary-text", Semantic::TextInverse),
    alias("button-primary-text-hover", Semantic::TextInverse),
    alias("button-primary-text-active", Semantic::TextInverse),
    alias("button-primary-text-disabled", Semantic::TextDisabled),
    alias("button-primary-border", Semantic::Accent),
    alias("button-primary-border-hover", Semantic::AccentHover),
    alias("button-primary-border-active", Semantic::AccentActive),
    alias("button-primary-border-disabled", Semantic::BorderSubtle),
    // ── Secondary button ──────────────────────────────────────
    literal("button-secondary-bg", TRANSPARENT),
    alias("button-secondary-bg-hover", Semantic::SurfaceSecondary),
    alias("button-secondary-bg-active", Semantic::BorderSubtle),
    literal("button-secondary-bg-disabled", TRANSPARENT),
    alias("button-secondary-text", Semantic::Accent),
    alias("button-secondary-text-hover", Semantic::AccentHover),
    alias("button-secondary-text-active", Semantic::AccentActive),
    alias("button-secondary-text-disabled", Semantic::TextDisabled),
    alias("button-secondary-border", Semantic::BorderDefault),
    alias("button-secondary-border-hover", Semantic::BorderStrong),
    alias("button-secondary-border-active", Semantic::AccentActive),
    alias("button-secondary-border-disabled", Semantic::BorderSubtle),
    alias("button-secondary-border-focus", Semantic::Accent),
    // ── Text input ────────────────────────────────────────────
    alias("input-bg", Semantic::SurfacePrimary),
    alias("input-bg-hover", Semantic::SurfacePrimary),
    alias("input-bg-active", Semantic::SurfacePrimary),
    alias("input-bg-disabled", Semantic::SurfaceSecondary),
    alias("input-text", Semantic::TextPrimary),
    alias("input-text-hover", Semantic::TextPrimary),
    alias("input-text-active", Semantic::TextPrimary),
    alias("input-text-placeholder", Semantic::TextMuted),
    alias("input-text-disabled", Semantic::TextDisabled),
    alias("input-border", Semantic::BorderDefault),
    alias("input-border-hover", Semantic::BorderStrong),
    alias("input-border-active", Semantic::Accent),
    alias("input-border-disabled", Semantic::BorderSubtle),
];
