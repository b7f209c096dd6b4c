//! Shared utilities: easing curves and frame timing.

pub mod easing;
/// Frame delta and smoothed FPS for the viewer loop.
pub mod frame_timing;
