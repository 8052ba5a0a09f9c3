// SPDX-License-Identifier: MIT
//
// CSS color functions: rgb(), rgba(), hsl(), hsla(), oklch().
//
// Both the legacy comma syntax and the modern space syntax with an
// optional `/ alpha` are accepted. Alpha is parsed but discarded; the
// token pipeline only deals in opaque colors.

/// A parsed functional color before it becomes hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    /// sRGB channels in `0.0..=1.0` (unclamped).
    Srgb(f64, f64, f64),
    /// OKLCH point, possibly out of gamut.
    Oklch(f64, f64, f64),
}

/// Parse a CSS functional color. Returns `None` for anything else.
pub fn parse_function(s: &str) -> Option<Parsed> {
    let open = s.find('(')?;
    let name = s[..open].trim().to_ascii_lowercase();
    let body = s[open + 1..].strip_suffix(')')?;

    let args: Vec<&str> = body
        .split(|ch: char| ch == ',' || ch == '/' || ch.is_whitespace())
        .filter(|arg| !arg.is_empty())
        .collect();
    if !matches!(args.len(), 3 | 4) {
        return None;
    }
    if let Some(alpha) = args.get(3) {
        number_or_percent(alpha, 1.0)?;
    }

    match name.as_str() {
        "rgb" | "rgba" => {
            let r = number_or_percent(args[0], 255.0)? / 255.0;
            let g = number_or_percent(args[1], 255.0)? / 255.0;
            let b = number_or_percent(args[2], 255.0)? / 255.0;
            Some(Parsed::Srgb(r, g, b))
        }
        "hsl" | "hsla" => {
            let h = angle(args[0])?;
            let s = percent(args[1])?;
            let l = percent(args[2])?;
            let (r, g, b) = hsl_to_srgb(h, s, l);
            Some(Parsed::Srgb(r, g, b))
        }
        "oklch" => {
            let l = number_or_percent(args[0], 1.0)?;
            let c = number_or_percent(args[1], 0.4)?;
            let h = angle(args[2])?;
            Some(Parsed::Oklch(l, c, h))
        }
        _ => None,
    }
}

/// A bare number, or a percentage scaled so that `100%` equals `full`.
fn number_or_percent(token: &str, full: f64) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => finite(pct.parse::<f64>().ok()? / 100.0 * full),
        None => finite(token.parse::<f64>().ok()?),
    }
}

/// A required percentage, returned as a fraction.
fn percent(token: &str) -> Option<f64> {
    finite(token.strip_suffix('%')?.parse::<f64>().ok()? / 100.0)
}

/// Hue in degrees; a `deg` suffix is allowed.
fn angle(token: &str) -> Option<f64> {
    let token = token.strip_suffix("deg").unwrap_or(token);
    finite(token.parse::<f64>().ok()?)
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// HSL → sRGB. Hue in degrees, saturation and lightness as fractions.
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        a.mul_add(-(k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), l)
    };
    (channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn hsl_primaries() {
        assert!(approx(hsl_to_srgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0)));
        assert!(approx(hsl_to_srgb(120.0, 1.0, 0.5), (0.0, 1.0, 0.0)));
        assert!(approx(hsl_to_srgb(240.0, 1.0, 0.5), (0.0, 0.0, 1.0)));
        assert!(approx(hsl_to_srgb(-120.0, 1.0, 0.5), (0.0, 0.0, 1.0)));
        assert!(approx(hsl_to_srgb(200.0, 0.0, 0.25), (0.25, 0.25, 0.25)));
    }

    #[test]
    fn comma_and_space_syntax_agree() {
        assert_eq!(parse_function("rgb(10, 20, 30)"), parse_function("rgb(10 20 30)"));
        assert_eq!(
            parse_function("hsla(10, 20%, 30%, 0.4)"),
            parse_function("hsl(10 20% 30% / 40%)")
        );
    }

    #[test]
    fn rejects_wrong_arity_and_units() {
        assert_eq!(parse_function("rgb(1 2)"), None);
        assert_eq!(parse_function("rgb(1 2 3 4 5)"), None);
        assert_eq!(parse_function("hsl(10 20 30)"), None);
        assert_eq!(parse_function("lab(50 20 30)"), None);
        assert_eq!(parse_function("rgb(1 2 x)"), None);
    }
}
