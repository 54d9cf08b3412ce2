//! Easing curves mapping tween progress in `[0, 1]` to output progress.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    /// Constant rate; used for scroll scrubbing.
    Linear,
    /// Strong deceleration, `1 - (1 - p)^4`.
    #[default]
    Power3Out,
    /// Decaying oscillation around the target. `amplitude` below 1 is treated as 1.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    pub fn elastic_out(amplitude: f32, period: f32) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    /// Sample the curve. Input is clamped, and both endpoints map exactly to 0 and 1.
    pub fn apply(self, p: f32) -> f32 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if p == 0.0 || p == 1.0 {
            return p;
        }
        match self {
            Ease::Linear => p,
            Ease::Power3Out => {
                let inv = 1.0 - p;
                1.0 - inv * inv * inv * inv
            }
            Ease::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let period = if period > 0.0 { period } else { 0.3 };
                let shift = period / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * p) * ((p - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}
