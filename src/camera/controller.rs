use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use super::rig::{CameraPose, CameraRig};
use crate::options::CameraOptions;

/// Smallest polar angle the orbit may reach. Keeps the view direction off
/// the up axis so the look-at basis stays well defined.
const MIN_POLAR_ANGLE: f32 = 0.01;

/// Closest the eye may get to the orbit target.
const MIN_DISTANCE: f32 = 0.5;

/// Slack before a constraint counts as violated. Poses that sit exactly on
/// a limit are left untouched.
const EPSILON: f32 = 1e-4;

/// Constraints applied after every orbit gesture and tween step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Minimum eye-target distance.
    pub min_distance: f32,
    /// Maximum eye-target distance.
    pub max_distance: f32,
    /// Maximum angle between the up axis and the target-to-eye direction.
    pub max_polar_angle: f32,
    /// Lowest allowed eye height, if any.
    pub min_height: Option<f32>,
}

impl OrbitLimits {
    /// No distance, angle or height limits beyond the basis safeguards.
    pub const UNCONSTRAINED: Self = Self {
        min_distance: MIN_DISTANCE,
        max_distance: f32::INFINITY,
        max_polar_angle: std::f32::consts::PI - MIN_POLAR_ANGLE,
        min_height: None,
    };

    /// Limits from user options: ground clamp, horizon clamp and maximum
    /// distance.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_distance: options.max_distance,
            max_polar_angle: options.max_polar_angle,
            min_height: Some(options.min_height),
        }
    }
}

/// Orbit-style camera controls around a movable target.
///
/// Left-drag rotates the eye about the target, panning translates both, and
/// zoom scales the eye-target distance. [`CameraRig::update`] re-applies
/// [`OrbitLimits`], touching the eye only when a limit is actually broken.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Camera driven by these controls. `eye` and `target` are the pose.
    pub camera: Camera,
    limits: OrbitLimits,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitControls {
    /// Controls starting at `pose` with projection and speeds from
    /// `options`.
    #[must_use]
    pub fn new(
        pose: CameraPose,
        aspect: f32,
        options: &CameraOptions,
        limits: OrbitLimits,
    ) -> Self {
        let camera = Camera {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        let mut controls = Self {
            camera,
            limits,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
        };
        controls.enforce_limits();
        controls
    }

    /// Active constraints.
    #[must_use]
    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Current eye-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.camera.eye - self.camera.target).length()
    }

    /// Update the projection aspect ratio after a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit the eye about the target by a cursor delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        let offset = self.camera.eye - self.camera.target;

        // Horizontal rotation about world up
        let yaw = Quat::from_axis_angle(Vec3::Y, -delta.x * self.rotate_speed);
        let offset = yaw * offset;

        // Vertical rotation about the camera's right vector. Refused when it
        // would tip the eye over the pole.
        let right = Vec3::Y.cross(offset).normalize_or_zero();
        let pitched = if right == Vec3::ZERO {
            offset
        } else {
            Quat::from_axis_angle(right, delta.y * self.rotate_speed) * offset
        };
        let offset = if polar_angle(pitched) < MIN_POLAR_ANGLE {
            offset
        } else {
            pitched
        };

        self.camera.eye = self.camera.target + offset;
        self.enforce_limits();
    }

    /// Translate eye and target in the view plane by a cursor delta in
    /// pixels. Speed scales with distance so panning feels uniform.
    pub fn pan(&mut self, delta: Vec2) {
        let forward = (self.camera.target - self.camera.eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let scale = self.pan_speed * self.distance();

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);
        self.camera.eye += translation;
        self.camera.target += translation;
        self.enforce_limits();
    }

    /// Move the eye toward (positive `delta`) or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let scaled = (distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.limits.min_distance, self.limits.max_distance);
        self.camera.eye = self.camera.target + offset * (scaled / distance);
        self.enforce_limits();
    }

    fn enforce_limits(&mut self) {
        let mut offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let mut adjusted = false;
        if distance > self.limits.max_distance + EPSILON {
            offset *= self.limits.max_distance / distance;
            adjusted = true;
        } else if distance < self.limits.min_distance - EPSILON {
            offset *= self.limits.min_distance / distance;
            adjusted = true;
        }

        if polar_angle(offset) > self.limits.max_polar_angle + EPSILON {
            let horizontal = Vec3::new(offset.x, 0.0, offset.z).normalize_or_zero();
            if horizontal != Vec3::ZERO {
                let (sin, cos) = self.limits.max_polar_angle.sin_cos();
                offset = (horizontal * sin + Vec3::Y * cos) * offset.length();
                adjusted = true;
            }
        }

        if adjusted {
            self.camera.eye = self.camera.target + offset;
        }

        if let Some(min_height) = self.limits.min_height {
            if self.camera.eye.y < min_height {
                self.camera.eye.y = min_height;
            }
        }
    }
}

/// Angle between the up axis and `offset`.
fn polar_angle(offset: Vec3) -> f32 {
    let len = offset.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    (offset.y / len).clamp(-1.0, 1.0).acos()
}

impl CameraRig for OrbitControls {
    fn pose(&self) -> CameraPose {
        CameraPose::new(self.camera.eye, self.camera.target)
    }

    fn set_pose(&mut self, pose: CameraPose) {
        self.camera.eye = pose.position;
        self.camera.target = pose.target;
    }

    fn update(&mut self) {
        self.enforce_limits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus_controls(pose: CameraPose) -> OrbitControls {
        let options = CameraOptions::default();
        OrbitControls::new(pose, 1.5, &options, OrbitLimits::from_options(&options))
    }

    #[test]
    fn in_bounds_pose_is_left_exact() {
        let pose = CameraPose::new(
            Vec3::new(-250.0, 190.0, 170.0),
            Vec3::new(-50.0, 0.0, 0.0),
        );
        let mut controls = campus_controls(pose);
        controls.set_pose(pose);
        controls.update();
        assert_eq!(controls.pose(), pose);
    }

    #[test]
    fn distance_is_clamped_to_maximum() {
        let mut controls = campus_controls(CameraPose::new(
            Vec3::new(0.0, 300.0, 400.0),
            Vec3::ZERO,
        ));
        assert!((controls.distance() - 450.0).abs() < 1e-2);
        controls.zoom(-50.0);
        assert!(controls.distance() <= 450.0 + 1e-2);
    }

    #[test]
    fn eye_never_dips_below_ground() {
        let mut controls = campus_controls(CameraPose::new(
            Vec3::new(0.0, 10.0, 50.0),
            Vec3::ZERO,
        ));
        controls.set_pose(CameraPose::new(Vec3::new(0.0, -20.0, 50.0), Vec3::ZERO));
        controls.update();
        assert!(controls.camera.eye.y >= 0.0);
        for _ in 0..50 {
            controls.rotate(Vec2::new(0.0, -40.0));
            assert!(controls.camera.eye.y >= -1e-4);
        }
    }

    #[test]
    fn rotate_preserves_distance() {
        let mut controls = campus_controls(CameraPose::new(
            Vec3::new(30.0, 40.0, 0.0),
            Vec3::ZERO,
        ));
        let before = controls.distance();
        controls.rotate(Vec2::new(25.0, 10.0));
        assert!((controls.distance() - before).abs() < 1e-3);
        assert_ne!(controls.camera.eye, Vec3::new(30.0, 40.0, 0.0));
    }

    #[test]
    fn zoom_in_moves_toward_target() {
        let mut controls = campus_controls(CameraPose::new(
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::ZERO,
        ));
        controls.zoom(1.0);
        assert!((controls.distance() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut controls = campus_controls(CameraPose::new(
            Vec3::new(0.0, 20.0, 100.0),
            Vec3::new(0.0, 20.0, 0.0),
        ));
        let offset_before = controls.camera.eye - controls.camera.target;
        controls.pan(Vec2::new(10.0, 0.0));
        let offset_after = controls.camera.eye - controls.camera.target;
        assert!((offset_after - offset_before).length() < 1e-3);
        assert!(controls.camera.target.x < 0.0);
    }

    #[test]
    fn unconstrained_allows_low_angles() {
        let options = CameraOptions::default();
        let pose = CameraPose::new(Vec3::new(3.0, -1.5, 3.0), Vec3::new(0.0, -1.5, 0.0));
        let controls = OrbitControls::new(pose, 1.0, &options, OrbitLimits::UNCONSTRAINED);
        assert_eq!(controls.pose(), pose);
    }
}
