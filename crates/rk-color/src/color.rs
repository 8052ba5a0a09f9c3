// SPDX-License-Identifier: MIT
//
// OKLCH color point with the sRGB round trip the ramp engine relies on.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ 8-bit hex
//
// Gamut mapping reduces chroma at constant lightness and hue until the
// point fits inside sRGB, so ramp steps never drift in hue when a sample
// lands outside the displayable range.

use std::fmt;

use crate::error::ColorError;
use crate::hex::HexColor;

/// Chroma below this is treated as gray. The hue of a gray is undefined
/// and never participates in interpolation.
const ACHROMATIC_EPSILON: f64 = 1e-5;

/// Per-channel slack when testing gamut membership. The sRGB ↔ Oklab
/// matrices are not exact inverses, so white comes back as `1.000_000_01`.
const GAMUT_EPSILON: f64 = 1e-7;

/// Binary-search iterations for [`Color::to_gamut`]. 32 halvings of the
/// largest sRGB chroma (~0.37) is far below 8-bit quantization.
const GAMUT_ITERATIONS: usize = 32;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color point in OKLCH space.
///
/// Fields are private: a `Color` only comes into existence through
/// [`Color::oklch`], a conversion from sRGB/hex, or [`Color::mix`], so the
/// hue is always wrapped to `[0, 360)`.
///
/// ```
/// use rk_color::{Color, normalize_hex};
///
/// let base = Color::from_hex(&normalize_hex("#1c2e7a").unwrap());
/// let lighter = Color::WHITE.mix(base, 0.5);
/// assert!(lighter.l() > base.l());
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    l: f64,
    c: f64,
    h: f64,
}

impl Color {
    /// Pure white. Achromatic, so its hue never pulls an interpolation.
    pub const WHITE: Self = Self {
        l: 1.0,
        c: 0.0,
        h: 0.0,
    };

    /// Pure black.
    pub const BLACK: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// Create a color from OKLCH values. The hue is wrapped to `[0, 360)`.
    #[must_use]
    pub fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Create a color from sRGB components in `0.0..=1.0`.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB components.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Convert a canonical hex color into OKLCH.
    #[must_use]
    pub fn from_hex(hex: &HexColor) -> Self {
        let (r, g, b) = hex.rgb8();
        Self::rgb8(r, g, b)
    }

    /// Perceptual lightness, 0.0 (black) to 1.0 (white).
    #[inline]
    #[must_use]
    pub const fn l(self) -> f64 {
        self.l
    }

    /// Chroma, 0.0 (gray) to roughly 0.37 for the most vivid sRGB colors.
    #[inline]
    #[must_use]
    pub const fn c(self) -> f64 {
        self.c
    }

    /// Hue angle in degrees, `[0, 360)`.
    #[inline]
    #[must_use]
    pub const fn h(self) -> f64 {
        self.h
    }

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_EPSILON
    }

    /// Whether every component is a finite number.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.l.is_finite() && self.c.is_finite() && self.h.is_finite()
    }

    /// Linearly interpolate toward `other` in OKLCH.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Lightness and
    /// chroma are interpolated componentwise. Hue takes the shortest arc:
    /// the signed delta is wrapped into (−180, 180], applied additively and
    /// the result wrapped back into [0, 360). When one side is achromatic
    /// its hue is undefined and the other side's hue is used unchanged.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: lerp(self.l, other.l, t),
            c: lerp(self.c, other.c, t),
            h,
        }
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        range.contains(&r) && range.contains(&g) && range.contains(&b)
    }

    /// Map this color into the sRGB gamut.
    ///
    /// Lightness is clamped to `0.0..=1.0` first; then a binary search finds
    /// the largest chroma that stays in gamut at the same lightness and hue.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        let clamped = Self {
            l: self.l.clamp(0.0, 1.0),
            ..self
        };
        if clamped.in_srgb_gamut() {
            return clamped;
        }

        let mut lo: f64 = 0.0;
        let mut hi: f64 = clamped.c;

        for _ in 0..GAMUT_ITERATIONS {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..clamped };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..clamped }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB with each channel clamped to `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB with each channel clamped.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Serialize to a canonical hex color.
    ///
    /// Callers that need hue-preserving output should run
    /// [`to_gamut`](Self::to_gamut) first; this only clamps channels.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ConversionFailed`] if any OKLCH component or
    /// any resulting sRGB channel is not finite.
    pub fn to_hex(self) -> Result<HexColor, ColorError> {
        let failed = || ColorError::ConversionFailed {
            point: format!("{self:?}"),
        };

        if !self.is_finite() {
            return Err(failed());
        }
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        if !(r.is_finite() && g.is_finite() && b.is_finite()) {
            return Err(failed());
        }

        Ok(HexColor::from_rgb8(
            to_u8(r.clamp(0.0, 1.0)),
            to_u8(g.clamp(0.0, 1.0)),
            to_u8(b.clamp(0.0, 1.0)),
        ))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.1})", self.l, self.c, self.h)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue Arithmetic ──────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-12 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Both directions pass through LMS cone space. Matrices from Björn
// Ottosson's reference: https://bottosson.github.io/posts/oklab/

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Apply the sRGB transfer curve to a linear component.
///
/// Sign-preserving so out-of-gamut negatives stay finite.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(abs.powf(1.0 / 2.4), -0.055).copysign(c)
    }
}

/// Remove the sRGB transfer curve from a gamma-encoded component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.040_45 {
        c / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4).copysign(c)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB, unclamped (may be out of gamut).
fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert a channel in `0.0..=1.0` to a byte, rounding half up.
/// Out-of-range input saturates.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ──────────────────────────────────────────────────────────────────
