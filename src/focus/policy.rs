use std::time::Duration;

use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;

/// When a departing focus target stops being exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTiming {
    /// Everything becomes visible as soon as the camera starts moving away.
    OnDeparture,
    /// Everything becomes visible once the camera reaches the overview.
    OnArrival,
}

/// How a [`FocusMachine`](super::FocusMachine) moves between targets.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusPolicy {
    /// Switching directly between two focused targets first returns to the
    /// overview pose.
    pub two_phase_switch: bool,
    /// Every focus request returns to the overview pose first, even from the
    /// overview.
    pub always_zoom_out: bool,
    /// Delay between arriving at the overview and starting the zoom-in.
    pub pause: Duration,
    /// Whether the focused target is drawn in the highlight color.
    pub highlight: bool,
    /// When the departing target's exclusivity ends.
    pub restore: RestoreTiming,
    /// Duration of each zoom toward or away from a target.
    pub focus_duration: Duration,
    /// Easing of each zoom toward or away from a target.
    pub focus_easing: EasingFunction,
    /// Duration of the move back to the overview on reset.
    pub reset_duration: Duration,
    /// Easing of the move back to the overview on reset.
    pub reset_easing: EasingFunction,
}

impl FocusPolicy {
    /// Click-to-focus boxes: two-phase switching, highlight, and immediate
    /// restore when leaving a box.
    #[must_use]
    pub fn boxes(options: &AnimationOptions) -> Self {
        Self {
            two_phase_switch: true,
            always_zoom_out: false,
            pause: Duration::ZERO,
            highlight: true,
            restore: RestoreTiming::OnDeparture,
            focus_duration: options.focus_duration(),
            focus_easing: options.focus_easing,
            reset_duration: options.focus_duration(),
            reset_easing: options.focus_easing,
        }
    }

    /// Stacked floors: always zoom out, pause, then zoom in. Floors are
    /// revealed only once the camera is back at the overview.
    #[must_use]
    pub fn floors(options: &AnimationOptions) -> Self {
        Self {
            two_phase_switch: true,
            always_zoom_out: true,
            pause: options.floor_pause(),
            highlight: false,
            restore: RestoreTiming::OnArrival,
            focus_duration: options.focus_duration(),
            focus_easing: options.focus_easing,
            reset_duration: options.focus_duration(),
            reset_easing: options.focus_easing,
        }
    }

    /// Campus: nothing is focusable, only the slower eased camera reset
    /// applies.
    #[must_use]
    pub fn campus(options: &AnimationOptions) -> Self {
        Self {
            two_phase_switch: false,
            always_zoom_out: false,
            pause: Duration::ZERO,
            highlight: false,
            restore: RestoreTiming::OnDeparture,
            focus_duration: options.focus_duration(),
            focus_easing: options.focus_easing,
            reset_duration: options.reset_duration(),
            reset_easing: options.reset_easing,
        }
    }
}
