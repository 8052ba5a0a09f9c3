//! # rk-ramp: nine-step perceptual color ramps
//!
//! Turns one base color into the 100–900 ramp that design-token systems
//! expect. All interpolation happens in OKLCH, so equal positions along the
//! ramp look like equal visual steps.
//!
//! # Pipeline
//!
//! ```text
//! base hex
//!     │
//!     ▼
//! white ── base ── black            (outer gradient)
//!      ╰─ 25% ─╯   ╰─ 75% ─╯
//!          │            │
//!          ▼            ▼
//!   light endpoint ── base ── dark endpoint   (refined gradient)
//!     │
//!     ▼  sample at the nine StopSet positions
//! gamut clamp → sRGB → hex; step 500 pinned to the base
//! ```
//!
//! ```
//! use rk_ramp::{Step, StopSet, generate_ramp9};
//!
//! let ramp = generate_ramp9("#1c2e7a", StopSet::Figma).unwrap();
//! assert_eq!(ramp[Step::S500].as_str(), "#1c2e7a");
//! ```

pub mod batch;
pub mod error;
mod gradient;
pub mod ramp;
pub mod step;

pub use batch::{RampBatch, generate_ramps};
pub use error::RampError;
pub use ramp::{Ramp, generate_ramp9};
pub use step::{Step, StopSet};
