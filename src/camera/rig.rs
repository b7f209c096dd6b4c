//! Camera pose and the render-surface handle the tween engine drives.

use glam::Vec3;

/// Camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
}

impl CameraPose {
    /// Pose from eye position and look target.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Componentwise linear interpolation of position and target.
    ///
    /// `t = 0` returns `self` and `t = 1` returns `other` bit-for-bit, so a
    /// completed tween always lands exactly on its end pose.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        Self {
            position: lerp_vec3(t, self.position, other.position),
            target: lerp_vec3(t, self.target, other.target),
        }
    }
}

/// `start + t * (end - start)`, componentwise.
#[inline]
#[must_use]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// Mutable camera + controls handle owned by the rendering surface.
///
/// The tween engine writes poses through this trait once per frame and then
/// calls [`update`](Self::update) so the controls can re-apply their
/// constraints (floor clamp, distance limits). It never constructs or
/// disposes the rig; callers pass `None` when the rig is not available.
pub trait CameraRig {
    /// Current eye position and controls target.
    fn pose(&self) -> CameraPose;

    /// Overwrite eye position and controls target.
    fn set_pose(&mut self, pose: CameraPose);

    /// Re-apply control constraints after a pose change.
    fn update(&mut self);
}

/// Rig that records every pose written to it.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct RecordingRig {
    pub(crate) pose: CameraPose,
    pub(crate) writes: Vec<CameraPose>,
    pub(crate) updates: usize,
}

#[cfg(test)]
impl RecordingRig {
    pub(crate) fn new(pose: CameraPose) -> Self {
        Self {
            pose,
            writes: Vec::new(),
            updates: 0,
        }
    }
}

#[cfg(test)]
impl CameraRig for RecordingRig {
    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.writes.push(pose);
    }

    fn update(&mut self) {
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = CameraPose::new(Vec3::new(0.1, 0.2, 0.3), Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(7.7, -3.3, 1e-3), Vec3::ONE);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_is_componentwise_linear() {
        let a = CameraPose::new(Vec3::new(20.0, 20.0, 20.0), Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::Y);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let p = a.lerp(&b, t);
            let expected = a.position + t * (b.position - a.position);
            assert!((p.position - expected).length() < 1e-4);
            assert!((p.target - Vec3::Y * t).length() < 1e-6);
        }
    }
}
