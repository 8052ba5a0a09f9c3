//! The ramp engine.

use std::ops::Index;

use rk_color::{Color, HexColor, normalize_hex};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::RampError;
use crate::gradient::Gradient;
use crate::step::{Step, StopSet};

/// Outer-gradient positions that become the refined gradient's endpoints.
const LIGHT_ENDPOINT_AT: f64 = 0.25;
const DARK_ENDPOINT_AT: f64 = 0.75;

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

/// Nine hex colors, one per [`Step`].
///
/// Immutable once built. Step 500 is always the normalized base color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ramp {
    steps: [HexColor; 9],
}

impl Ramp {
    /// The color at `step`.
    #[must_use]
    pub const fn get(&self, step: Step) -> &HexColor {
        &self.steps[step.index()]
    }

    /// The base color (step 500).
    #[must_use]
    pub const fn base(&self) -> &HexColor {
        self.get(Step::S500)
    }

    /// `(step, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Step, &HexColor)> {
        Step::ALL.into_iter().zip(self.steps.iter())
    }
}

impl Index<Step> for Ramp {
    type Output = HexColor;

    fn index(&self, step: Step) -> &HexColor {
        self.get(step)
    }
}

/// Serializes as `{"100": "#…", …, "900": "#…"}`.
impl Serialize for Ramp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (step, hex) in self.iter() {
            map.serialize_entry(&step.value().to_string(), hex)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the nine-step ramp for `base_hex`.
///
/// The base is placed at the middle of a white → base → black gradient in
/// OKLCH. The 25% and 75% samples of that gradient become the endpoints of
/// a tighter light → base → dark gradient, which is then sampled at the
/// [`StopSet`] positions. Each sample is gamut-mapped by chroma reduction
/// and serialized; finally step 500 is replaced by the normalized base so
/// the round trip can never drift it.
///
/// # Errors
///
/// - [`RampError::InvalidColor`] if `base_hex` does not parse.
/// - [`RampError::ConversionFailed`] if a sample cannot be serialized.
pub fn generate_ramp9(base_hex: &str, stops: StopSet) -> Result<Ramp, RampError> {
    let base_hex = normalize_hex(base_hex).map_err(|source| RampError::InvalidColor {
        input: base_hex.to_owned(),
        source,
    })?;
    let base = Color::from_hex(&base_hex);

    let outer = Gradient::new(Color::WHITE, base, Color::BLACK);
    let refined = Gradient::new(
        outer.sample(LIGHT_ENDPOINT_AT),
        base,
        outer.sample(DARK_ENDPOINT_AT),
    );

    let mut colors: [HexColor; 9] = std::array::from_fn(|_| base_hex.clone());
    for (step, t) in Step::ALL.into_iter().zip(stops.positions()) {
        let sample = refined.sample(t);
        colors[step.index()] = sample
            .to_gamut()
            .to_hex()
            .map_err(|source| RampError::ConversionFailed { step, source })?;
        log::trace!("{base_hex} step {step} at {t}: {sample:?} -> {}", colors[step.index()]);
    }

    colors[Step::S500.index()] = base_hex.clone();
    log::debug!("generated {stops} ramp for {base_hex}");

    Ok(Ramp { steps: colors })
}
