//! Ramp generation over a whole palette.
//!
//! Each color is independent: a bad base color lands in
//! [`RampBatch::failures`] and every other color still gets its ramp.

use std::collections::BTreeMap;

use crate::error::RampError;
use crate::ramp::{Ramp, generate_ramp9};
use crate::step::StopSet;

/// Result of [`generate_ramps`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RampBatch {
    /// Ramps keyed by palette id.
    pub ramps: BTreeMap<String, Ramp>,
    /// Ids whose base color could not be turned into a ramp, in input order.
    pub failures: Vec<(String, RampError)>,
}

impl RampBatch {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate one ramp per `(id, base color)` pair.
pub fn generate_ramps<'a, I>(colors: I, stops: StopSet) -> RampBatch
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut batch = RampBatch::default();
    for (id, hex) in colors {
        match generate_ramp9(hex, stops) {
            Ok(ramp) => {
                batch.ramps.insert(id.to_owned(), ramp);
            }
            Err(err) => batch.failures.push((id.to_owned(), err)),
        }
    }
    log::debug!(
        "generated {} ramps ({} failed)",
        batch.ramps.len(),
        batch.failures.len()
    );
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn one_bad_color_does_not_block_the_rest() {
        let batch = generate_ramps(
            [("blue", "#1c2e7a"), ("broken", "not a color"), ("sand", "#f4e3c1")],
            StopSet::Figma,
        );

        assert!(!batch.is_complete());
        assert_eq!(batch.ramps.len(), 2);
        assert_eq!(batch.ramps["blue"][Step::S500].as_str(), "#1c2e7a");
        assert_eq!(batch.ramps["sand"][Step::S500].as_str(), "#f4e3c1");

        assert_eq!(batch.failures.len(), 1);
        let (id, err) = &batch.failures[0];
        assert_eq!(id, "broken");
        assert!(matches!(err, RampError::InvalidColor { .. }));
    }

    #[test]
    fn empty_palette_is_complete() {
        let batch = generate_ramps(std::iter::empty::<(&str, &str)>(), StopSet::Even);
        assert!(batch.is_complete());
        assert!(batch.ramps.is_empty());
    }

    #[test]
    fn matches_single_generation() {
        let batch = generate_ramps([("accent", "#e4572e")], StopSet::Even);
        assert_eq!(
            batch.ramps["accent"],
            generate_ramp9("#e4572e", StopSet::Even).unwrap()
        );
    }
}
