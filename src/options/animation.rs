use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

const MAX_DURATION_MS: i64 = 5000;
const MAX_PAUSE_MS: i64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Camera tween timing and easing.
///
/// Durations are signed milliseconds; zero or negative values make the
/// corresponding move instantaneous. Values above the schema range are
/// clamped to its maximum.
pub struct AnimationOptions {
    /// Duration of each focus zoom phase.
    #[schemars(title = "Focus Duration (ms)", range(min = 0, max = 5000))]
    pub focus_duration_ms: i64,
    /// Duration of the campus camera reset.
    #[schemars(title = "Reset Duration (ms)", range(min = 0, max = 5000))]
    pub reset_duration_ms: i64,
    /// Delay between the zoom-out and zoom-in phases of a floor change.
    #[schemars(title = "Floor Pause (ms)", range(min = 0, max = 2000))]
    pub floor_pause_ms: i64,
    /// Easing for focus zooms.
    #[schemars(title = "Focus Easing")]
    pub focus_easing: EasingFunction,
    /// Easing for the campus camera reset.
    #[schemars(title = "Reset Easing")]
    pub reset_easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            focus_duration_ms: 1000,
            reset_duration_ms: 2000,
            floor_pause_ms: 500,
            focus_easing: EasingFunction::Linear,
            reset_easing: EasingFunction::QuadraticOut,
        }
    }
}

impl AnimationOptions {
    /// Focus zoom duration, clamped to 0..=5000 ms.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        millis(self.focus_duration_ms, MAX_DURATION_MS)
    }

    /// Reset duration, clamped to 0..=5000 ms.
    #[must_use]
    pub fn reset_duration(&self) -> Duration {
        millis(self.reset_duration_ms, MAX_DURATION_MS)
    }

    /// Floor pause, clamped to 0..=2000 ms.
    #[must_use]
    pub fn floor_pause(&self) -> Duration {
        millis(self.floor_pause_ms, MAX_PAUSE_MS)
    }
}

fn millis(ms: i64, max: i64) -> Duration {
    Duration::from_millis(u64::try_from(ms.min(max)).unwrap_or(0))
}
