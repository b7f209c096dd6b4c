//! Camera animation: a single cancellable tween between two poses.

pub mod tween;

pub use tween::{JobId, TweenEngine, TweenJob, TweenStart, TweenTick};
