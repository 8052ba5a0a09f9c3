//! # rk-tokens: design-token bundles from color ramps
//!
//! Projects a palette's ramps through a per-theme role mapping into three
//! layers of tokens, then renders them as CSS custom properties and as an
//! equivalent JSON tree.
//!
//! # Architecture
//!
//! ```text
//! palette + ramps
//!     │
//!     ▼
//! primitives:  --c-<id>-<step>: #rrggbb          (one per color × step)
//!     │
//!     ▼  Mapping (light/dark → role → palette id)
//! semantic:    --text-primary: var(--c-ink-900)  (fixed step per theme)
//!     │
//!     ▼
//! component:   --button-primary-bg: var(…)       (aliases of semantics)
//!     │
//!     ▼
//! TokenBundle::css() / TokenBundle::json()
//! ```
//!
//! Semantic and component tokens are references, never copied colors, so
//! downstream tooling can see which primitive every role points at.

pub mod builtin;
pub mod bundle;
pub mod contrast;
pub mod error;
pub mod mapping;
pub mod palette;
pub mod slots;

pub use bundle::{ThemeTokens, TokenBundle, TokenValue, build_tokens, primitive_name};
pub use error::TokenError;
pub use mapping::{Mapping, Role, Theme, ThemeMapping};
pub use palette::PaletteColor;
