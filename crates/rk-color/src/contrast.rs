// SPDX-License-Identifier: MIT
//
// WCAG 2.1 contrast between two hex colors.
//
// Luminance is defined on linearized sRGB, so these helpers work directly
// from the 8-bit channels of a `HexColor` rather than from OKLCH.

use crate::color::srgb_to_linear;
use crate::hex::HexColor;

/// WCAG AA threshold for body text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// WCAG AA threshold for large text and UI components.
pub const AA_LARGE_TEXT: f64 = 3.0;

/// Relative luminance per WCAG 2.1, in `0.0..=1.0`.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: &HexColor) -> f64 {
    let (r, g, b) = color.rgb8();
    let lin = |v: u8| srgb_to_linear(f64::from(v) / 255.0);
    0.2126f64.mul_add(lin(r), 0.7152f64.mul_add(lin(g), 0.0722 * lin(b)))
}

/// Contrast ratio in `1.0..=21.0`, independent of argument order.
#[must_use]
pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
