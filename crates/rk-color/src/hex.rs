// SPDX-License-Identifier: MIT
//
// Canonical hex colors.
//
// Every color that leaves this crate is a `HexColor`: `#` followed by six
// lowercase hex digits. Input is far more permissive (shorthand, upper
// case, alpha digits, CSS functional notation) and is funneled through
// `normalize_hex` exactly once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, to_u8};
use crate::css;
use crate::error::ColorError;

/// A normalized `#rrggbb` color string.
///
/// The only ways to build one are [`normalize_hex`], [`FromStr`],
/// [`HexColor::from_rgb8`] and deserialization (which normalizes), so the
/// inner string always matches `#[0-9a-f]{6}`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Build from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// The canonical string, including the leading `#`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the three channels.
    #[must_use]
    pub fn rgb8(&self) -> (u8, u8, u8) {
        let bytes = &self.0.as_bytes()[1..];
        // The invariant guarantees six valid digits.
        let byte = |i: usize| (hex_digit(bytes[i]) << 4) | hex_digit(bytes[i + 1]);
        (byte(0), byte(2), byte(4))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        normalize_hex(&s)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ─── Validation & Normalization ─────────────────────────────────────────────

/// Whether `s` (after trimming) is a `#RGB` or `#RRGGBB` hex color.
///
/// Case-insensitive. The leading `#` is required. Never fails.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    s.trim()
        .strip_prefix('#')
        .is_some_and(|digits| matches!(digits.len(), 3 | 6) && all_hex_digits(digits))
}

/// Normalize any recognized color string to a canonical [`HexColor`].
///
/// - `#RGB` expands to `#RRGGBB`; digits are lowercased.
/// - `#RGBA` / `#RRGGBBAA` drop the alpha digits.
/// - `rgb()`, `rgba()`, `hsl()`, `hsla()` and `oklch()` are converted to
///   sRGB (OKLCH input is gamut-mapped first) and serialized.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] when the input matches none of the
/// above.
pub fn normalize_hex(s: &str) -> Result<HexColor, ColorError> {
    let trimmed = s.trim();

    if let Some(digits) = trimmed.strip_prefix('#') {
        if !all_hex_digits(digits) {
            return Err(ColorError::invalid(s));
        }
        return match digits.len() {
            3 | 4 => {
                let mut out = String::with_capacity(7);
                out.push('#');
                for ch in digits[..3].chars() {
                    let ch = ch.to_ascii_lowercase();
                    out.push(ch);
                    out.push(ch);
                }
                Ok(HexColor(out))
            }
            6 | 8 => Ok(HexColor(format!("#{}", digits[..6].to_ascii_lowercase()))),
            _ => Err(ColorError::invalid(s)),
        };
    }

    let color = css::parse_function(trimmed).ok_or_else(|| ColorError::invalid(s))?;
    let converted = match color {
        css::Parsed::Srgb(r, g, b) => {
            if !(r.is_finite() && g.is_finite() && b.is_finite()) {
                return Err(ColorError::invalid(s));
            }
            let (r, g, b) = (to_u8(r), to_u8(g), to_u8(b));
            HexColor::from_rgb8(r, g, b)
        }
        css::Parsed::Oklch(l, c, h) => Color::oklch(l, c, h).to_gamut().to_hex()?,
    };
    log::trace!("normalized {trimmed:?} to {converted}");

    // The converted form is itself hex; one more pass canonicalizes it.
    normalize_hex(converted.as_str())
}

fn all_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
