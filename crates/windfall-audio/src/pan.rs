//! Constant-power pan law with height falloff.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

/// Left/right channel gains, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub left: f64,
    pub right: f64,
}

impl Levels {
    /// Unpanned full volume.
    pub const NEUTRAL: Levels = Levels {
        left: 1.0,
        right: 1.0,
    };

    /// Gains for a body centered at `(x, y)` in an arena `width` x `height`
    /// physics units, floor at y = 0.
    ///
    /// Volume falls off with the cube of height once the body is above the
    /// workspace; the pan angle is proportional to the offset from the
    /// horizontal center and clamped to a quarter turn.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        let offset = x - width / 2.0;
        let falloff = 1.0 / (y / height).max(1.0).powi(3);
        let angle = (offset / width * FRAC_PI_2).clamp(-FRAC_PI_4, FRAC_PI_4);
        let (sin, cos) = angle.sin_cos();
        Self {
            left: round2(falloff * FRAC_1_SQRT_2 * (cos - sin)),
            right: round2(falloff * FRAC_1_SQRT_2 * (cos + sin)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
