// SPDX-License-Identifier: MIT
//
// rk-color: perceptual color primitives for rampkit.
//
// Everything the ramp engine needs to move between the display world
// (hex strings, 8-bit sRGB) and the perceptual world (OKLCH), plus the
// canonical hex type that flows through the rest of the workspace.
//
//   input string ──► hex::normalize_hex ──► HexColor
//                                              │
//                                              ▼
//                         color::Color (OKLCH) ◄─► sRGB ──► HexColor
//
// The crate keeps no state. Every function is pure.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
mod css;
pub mod error;
pub mod hex;

pub use color::Color;
pub use error::ColorError;
pub use hex::{HexColor, is_valid_hex, normalize_hex};
