//! Easing curves for camera tweens.
//!
//! A tween samples its raw, linear fraction once per frame and passes it
//! through one of these curves. Every curve maps `0 -> 0` and `1 -> 1`
//! exactly, so a tween always lands on its end pose regardless of easing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve applied to a tween's raw fraction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// No easing; camera moves at constant speed.
    #[default]
    Linear,
    /// Quadratic ease-out (fast start, gentle arrival).
    QuadraticOut,
    /// Quadratic ease-in-out (gentle start and arrival).
    QuadraticInOut,
    /// Cubic ease-out (stronger deceleration than quadratic).
    CubicOut,
}

impl EasingFunction {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
        }
    }
}
