//! Ramp step identifiers and the sampling positions that produce them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One of the nine fixed ramp steps, 100 (lightest) to 900 (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Step {
    /// Every step, lightest first.
    pub const ALL: [Self; 9] = [
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric token value: 100, 200, … 900.
    #[must_use]
    pub const fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Position within [`Step::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u16> for Step {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value % 100 != 0 || !(100..=900).contains(&value) {
            return Err(value);
        }
        Ok(Self::ALL[usize::from(value / 100 - 1)])
    }
}

// ---------------------------------------------------------------------------
// StopSet
// ---------------------------------------------------------------------------

/// Sampling positions along the refined gradient, one per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopSet {
    /// The positions Figma's gradient tooling rounds to.
    #[default]
    Figma,
    /// Exact eighths.
    Even,
}

const FIGMA_STOPS: [f64; 9] = [0.0, 0.13, 0.25, 0.38, 0.50, 0.63, 0.75, 0.88, 1.0];
const EVEN_STOPS: [f64; 9] = [0.0, 0.125, 0.25, 0.375, 0.50, 0.625, 0.75, 0.875, 1.0];

impl StopSet {
    /// Positions for steps 100..900, in order.
    #[must_use]
    pub const fn positions(self) -> [f64; 9] {
        match self {
            Self::Figma => FIGMA_STOPS,
            Self::Even => EVEN_STOPS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Figma => "figma",
            Self::Even => "even",
        }
    }
}

impl fmt::Display for StopSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StopSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "figma" => Ok(Self::Figma),
            "even" => Ok(Self::Even),
            other => Err(format!("unknown stop set {other:?} (expected \"figma\" or \"even\")")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_values_are_hundreds() {
        let values: Vec<u16> = Step::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, [100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn step_try_from_round_trips() {
        for step in Step::ALL {
            assert_eq!(Step::try_from(step.value()), Ok(step));
        }
        assert_eq!(Step::try_from(0), Err(0));
        assert_eq!(Step::try_from(150), Err(150));
        assert_eq!(Step::try_from(1000), Err(1000));
    }

    #[test]
    fn steps_order_lightest_first() {
        assert!(Step::S100 < Step::S500);
        assert!(Step::S500 < Step::S900);
        assert_eq!(Step::S300.to_string(), "300");
    }

    #[test]
    fn stop_sets_share_endpoints_and_midpoint() {
        for set in [StopSet::Figma, StopSet::Even] {
            let p = set.positions();
            assert!(p[0].abs() < f64::EPSILON);
            assert!((p[4] - 0.5).abs() < f64::EPSILON);
            assert!((p[8] - 1.0).abs() < f64::EPSILON);
            assert!(p.windows(2).all(|w| w[0] < w[1]), "{set} not increasing");
        }
    }

    #[test]
    fn stop_set_parses_case_insensitively() {
        assert_eq!("Figma".parse::<StopSet>(), Ok(StopSet::Figma));
        assert_eq!(" even ".parse::<StopSet>(), Ok(StopSet::Even));
        assert!("linear".parse::<StopSet>().is_err());
        assert_eq!(StopSet::default(), StopSet::Figma);
    }
}
