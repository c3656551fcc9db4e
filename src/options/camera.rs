use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Scales drag distance into rotation, spin and dolly amounts.
    #[schemars(title = "Motion Factor", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub motion_factor: f32,
    /// Extra scale applied to scroll-wheel dolly.
    #[schemars(title = "Wheel Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub mouse_wheel_motion_factor: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Closest allowed distance to the focus point.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed distance from the focus point.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 0.1,
            zfar: 2000.0,
            motion_factor: 10.0,
            mouse_wheel_motion_factor: 1.0,
            pan_speed: 1.0,
            min_distance: 0.01,
            max_distance: 1000.0,
        }
    }
}
