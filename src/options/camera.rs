use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit sensitivity in radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity as a fraction of orbit distance per pixel.
    #[schemars(title = "Pan Speed", range(min = 0.0005, max = 0.01))]
    pub pan_speed: f32,
    /// Zoom sensitivity per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5))]
    pub zoom_speed: f32,
    /// Maximum distance between eye and orbit target.
    #[schemars(title = "Max Distance", range(min = 10.0, max = 2000.0))]
    pub max_distance: f32,
    /// Maximum polar angle in radians, measured from straight up. The
    /// default keeps the camera from dipping below the horizon.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Lowest allowed eye height.
    #[schemars(skip)]
    pub min_height: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 2000.0,
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
            max_distance: 450.0,
            max_polar_angle: std::f32::consts::FRAC_PI_2,
            min_height: 0.0,
        }
    }
}
