use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Signed world axis used as the scene's "up" direction.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
pub enum UpAxis {
    /// Positive X.
    #[serde(rename = "+X")]
    PosX,
    /// Negative X.
    #[serde(rename = "-X")]
    NegX,
    /// Positive Y.
    #[default]
    #[serde(rename = "+Y")]
    PosY,
    /// Negative Y.
    #[serde(rename = "-Y")]
    NegY,
    /// Positive Z.
    #[serde(rename = "+Z")]
    PosZ,
    /// Negative Z.
    #[serde(rename = "-Z")]
    NegZ,
}

impl UpAxis {
    /// Unit vector pointing along this axis.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosY => Vec3::Y,
            Self::NegY => Vec3::NEG_Y,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// How drag gestures are interpreted.
pub struct InteractionOptions {
    /// Constrain rotation to azimuth around the up axis instead of free
    /// trackball tumbling.
    #[schemars(title = "Turntable Rotation")]
    pub turntable: bool,
    /// World up direction used by turntable rotation.
    #[schemars(title = "Up Axis")]
    pub up: UpAxis,
    /// Reverse the scroll-wheel zoom direction.
    #[schemars(title = "Invert Zoom")]
    pub invert_zoom: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            turntable: true,
            up: UpAxis::PosY,
            invert_zoom: false,
        }
    }
}
