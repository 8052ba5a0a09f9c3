//! Three-point gradients in OKLCH.

use rk_color::Color;

/// A gradient with `start` at 0%, `mid` at 50% and `end` at 100%.
///
/// Each half is a plain two-color interpolation, so the midpoint is hit
/// exactly and the two halves may move at different rates.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    start: Color,
    mid: Color,
    end: Color,
}

impl Gradient {
    pub const fn new(start: Color, mid: Color, end: Color) -> Self {
        Self { start, mid, end }
    }

    /// Sample at `t` in `0.0..=1.0`.
    pub fn sample(&self, t: f64) -> Color {
        if t <= 0.5 {
            self.start.mix(self.mid, t / 0.5)
        } else {
            self.mid.mix(self.end, (t - 0.5) / 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_all_three_anchors() {
        let start = Color::oklch(0.9, 0.02, 100.0);
        let mid = Color::oklch(0.5, 0.1, 120.0);
        let end = Color::oklch(0.2, 0.05, 140.0);
        let g = Gradient::new(start, mid, end);

        assert_eq!(g.sample(0.0), start);
        assert_eq!(g.sample(0.5), mid);
        assert_eq!(g.sample(1.0), end);
    }

    #[test]
    fn quarter_points_split_each_half() {
        let g = Gradient::new(Color::WHITE, Color::oklch(0.5, 0.1, 200.0), Color::BLACK);

        let light = g.sample(0.25);
        assert!((light.l() - 0.75).abs() < 1e-12);
        assert!((light.c() - 0.05).abs() < 1e-12);
        assert!((light.h() - 200.0).abs() < 1e-12);

        let dark = g.sample(0.75);
        assert!((dark.l() - 0.25).abs() < 1e-12);
        assert!((dark.c() - 0.05).abs() < 1e-12);
        assert!((dark.h() - 200.0).abs() < 1e-12);
    }
}
