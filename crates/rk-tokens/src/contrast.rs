//! WCAG readability report for the foreground/background pairs a theme
//! actually puts on screen.
//!
//! Primary and inverse text must reach AA (4.5:1). Secondary text sits at
//! step 700 on a step-100 surface, which only the large-text / UI-component
//! threshold (3:1) can hold across bases; the accent is held to the same
//! 3:1 because it colors buttons and links rather than paragraphs.

use rk_color::contrast::{AA_LARGE_TEXT, AA_NORMAL_TEXT, contrast_ratio};

use crate::bundle::TokenBundle;
use crate::mapping::Theme;
use crate::slots::Semantic;

/// Pairs checked by [`contrast_report`], with their minimum ratio.
pub const CONTRAST_PAIRS: [(Semantic, Semantic, f64); 4] = [
    (Semantic::TextPrimary, Semantic::SurfacePrimary, AA_NORMAL_TEXT),
    (Semantic::TextSecondary, Semantic::SurfacePrimary, AA_LARGE_TEXT),
    (Semantic::TextInverse, Semantic::SurfaceInverse, AA_NORMAL_TEXT),
    (Semantic::Accent, Semantic::SurfacePrimary, AA_LARGE_TEXT),
];

/// One measured pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub theme: Theme,
    pub foreground: Semantic,
    pub background: Semantic,
    pub ratio: f64,
    pub minimum: f64,
}

impl ContrastCheck {
    #[must_use]
    pub fn passes(&self) -> bool {
        self.ratio >= self.minimum
    }
}

/// Measure every pair in [`CONTRAST_PAIRS`] for both themes.
#[must_use]
pub fn contrast_report(bundle: &TokenBundle) -> Vec<ContrastCheck> {
    let mut checks = Vec::with_capacity(Theme::ALL.len() * CONTRAST_PAIRS.len());
    for theme in Theme::ALL {
        for (foreground, background, minimum) in CONTRAST_PAIRS {
            let fg = bundle.resolve(theme, &foreground.property());
            let bg = bundle.resolve(theme, &background.property());
            let (Some(fg), Some(bg)) = (fg, bg) else {
                continue;
            };
            checks.push(ContrastCheck {
                theme,
                foreground,
                background,
                ratio: contrast_ratio(fg, bg),
                minimum,
            });
        }
    }
    checks
}
