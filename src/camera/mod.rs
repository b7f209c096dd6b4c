//! Camera system for 3D scene viewing.
//!
//! Provides the camera pose and rig abstraction the tween engine drives,
//! orbit controls with ground, horizon and distance limits, and the GPU
//! uniform types.

/// Orbit controls: rotation, pan and zoom under [`OrbitLimits`].
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Camera pose and the [`CameraRig`] trait.
pub mod rig;

pub use controller::{OrbitControls, OrbitLimits};
pub use rig::{CameraPose, CameraRig};
