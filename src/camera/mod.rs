//! Camera system for 3D scene viewing.
//!
//! [`CameraManipulator`] is the trackball capability the interactor gates;
//! [`TrackballCamera`] is the default orbit implementation and
//! [`SkyboxOrientation`] the default skybox it keeps in sync.

/// Core camera struct and matrices.
pub mod core;
/// Skybox orientation kept in lockstep with environment rotation.
pub mod skybox;
/// Orbit camera implementing the trackball primitives.
pub mod trackball;

use glam::{Quat, Vec2, Vec3};

pub use self::core::Camera;
pub use skybox::{Skybox, SkyboxOrientation};
pub use trackball::TrackballCamera;

/// Axis that the azimuth part of a [`Rotation`] turns around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationAxis {
    /// The camera's own current up vector (free trackball).
    ViewUp,
    /// A fixed world axis (turntable).
    Fixed(Vec3),
}

/// An orbit step around the focus point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Degrees around [`axis`](Self::axis).
    pub azimuth: f32,
    /// Degrees around the camera's right vector.
    pub elevation: f32,
    /// Axis for the azimuth component.
    pub axis: RotationAxis,
}

impl Rotation {
    /// Unconstrained two-axis rotation.
    #[must_use]
    pub fn free(azimuth: f32, elevation: f32) -> Self {
        Self {
            azimuth,
            elevation,
            axis: RotationAxis::ViewUp,
        }
    }

    /// Azimuth-only rotation around a fixed `up` axis.
    #[must_use]
    pub fn turntable(azimuth: f32, up: Vec3) -> Self {
        Self {
            azimuth,
            elevation: 0.0,
            axis: RotationAxis::Fixed(up),
        }
    }
}

/// Generic trackball primitives.
///
/// Angles are in degrees, pan deltas in physical pixels. Implementations
/// perform the transform math; deciding *whether* a gesture may run is the
/// interactor's job.
pub trait CameraManipulator {
    /// Orbit around the focus point.
    fn rotate(&mut self, rotation: Rotation);

    /// Roll around the view direction.
    fn spin(&mut self, angle: f32);

    /// Translate parallel to the view plane.
    fn pan(&mut self, delta: Vec2);

    /// Scale the distance to the focus point by `1 / factor`.
    fn dolly(&mut self, factor: f32);

    /// Dolly by a factor derived from the tracked pointer motion.
    fn dolly_tracked(&mut self);

    /// Rotate the environment around `up` and return the applied
    /// incremental rotation.
    fn environment_rotate(&mut self, angle: f32, up: Vec3) -> Quat;

    /// Record a pointer position sample for motion-derived gestures.
    fn track_pointer(&mut self, _x: f32, _y: f32) {}
}
