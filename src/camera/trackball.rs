use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use super::{CameraManipulator, Rotation, RotationAxis};
use crate::options::CameraOptions;

/// Base of the exponential dolly curve used for tracked motion.
const DOLLY_BASE: f32 = 1.1;

/// Framing the camera returns to on [`TrackballCamera::reset`].
#[derive(Debug, Clone, Copy)]
struct HomeView {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
}

/// Orbit camera around a focus point, driven by trackball primitives.
///
/// The camera sits at `focus_point + orientation * Z * distance` and looks
/// at the focus point with `orientation * Y` as its up vector.
#[derive(Debug, Clone)]
pub struct TrackballCamera {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    home: HomeView,

    camera: Camera,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    /// Latest and previous pointer samples.
    pointer: Option<Vec2>,
    previous_pointer: Option<Vec2>,

    environment: Quat,

    motion_factor: f32,
    pan_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl TrackballCamera {
    /// Camera for a viewport of the given size, using default options.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_options(&CameraOptions::default(), width, height)
    }

    /// Camera for a viewport of the given size.
    #[must_use]
    pub fn with_options(options: &CameraOptions, width: u32, height: u32) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = 10.0;
        let orientation = Quat::IDENTITY;

        let camera = Camera {
            eye: focus_point + Vec3::Z * distance,
            target: focus_point,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut trackball = Self {
            orientation,
            distance,
            focus_point,
            home: HomeView {
                orientation,
                distance,
                focus_point,
            },
            camera,
            viewport: Vec2::new(width as f32, height as f32),
            pointer: None,
            previous_pointer: None,
            environment: Quat::IDENTITY,
            motion_factor: options.motion_factor,
            pan_speed: options.pan_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        trackball.update_camera_pos();
        trackball
    }

    /// Pick up projection and control parameters from `options`.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.motion_factor = options.motion_factor;
        self.pan_speed = options.pan_speed;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Current camera (eye, target, projection parameters).
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Orientation of the camera around the focus point.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Distance from eye to focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Accumulated environment rotation.
    #[must_use]
    pub fn environment_orientation(&self) -> Quat {
        self.environment
    }

    /// Update the aspect ratio and motion scaling for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.aspect = aspect_ratio(width, height);
    }

    /// Return to the home framing (initial, or the last fit).
    pub fn reset(&mut self) {
        self.orientation = self.home.orientation;
        self.distance = self.home.distance;
        self.focus_point = self.home.focus_point;
        self.update_camera_pos();
    }

    /// Adjust camera to fit the given positions, centering on their centroid
    /// and setting distance so all points are visible. The result becomes the
    /// home framing.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let half_fovy = self.camera.fovy.to_radians() / 2.0;
        let fit_distance = radius / half_fovy.tan();
        // 1.5x padding for comfortable view
        self.distance =
            (fit_distance * 1.5).clamp(self.min_distance, self.max_distance);

        self.home = HomeView {
            orientation: self.orientation,
            distance: self.distance,
            focus_point: self.focus_point,
        };
        self.update_camera_pos();
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }
}

impl CameraManipulator for TrackballCamera {
    fn rotate(&mut self, rotation: Rotation) {
        let view_up = self.orientation * Vec3::Y;
        let axis = match rotation.axis {
            RotationAxis::ViewUp => view_up,
            RotationAxis::Fixed(axis) => {
                let axis = axis.normalize_or_zero();
                if axis == Vec3::ZERO {
                    view_up
                } else {
                    axis
                }
            }
        };

        let horizontal =
            Quat::from_axis_angle(axis, rotation.azimuth.to_radians());
        self.orientation = horizontal * self.orientation;

        if rotation.elevation != 0.0 {
            // Right vector after the horizontal step
            let right = self.orientation * Vec3::X;
            let vertical =
                Quat::from_axis_angle(right, rotation.elevation.to_radians());
            self.orientation = vertical * self.orientation;
        }

        self.orientation = self.orientation.normalize();
        self.update_camera_pos();
    }

    fn spin(&mut self, angle: f32) {
        let view_axis = self.orientation * Vec3::Z;
        let roll = Quat::from_axis_angle(view_axis, angle.to_radians());
        self.orientation = (roll * self.orientation).normalize();
        self.update_camera_pos();
    }

    fn pan(&mut self, delta: Vec2) {
        if self.viewport.y <= 0.0 {
            return;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        // World units covered by one pixel at the focus distance
        let half_fovy = self.camera.fovy.to_radians() / 2.0;
        let world_per_pixel =
            2.0 * self.distance * half_fovy.tan() / self.viewport.y;

        let translation = (right * -delta.x + up * delta.y)
            * world_per_pixel
            * self.pan_speed;

        self.focus_point += translation;
        self.update_camera_pos();
    }

    fn dolly(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.distance =
            (self.distance / factor).clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    fn dolly_tracked(&mut self) {
        let (Some(previous), Some(current)) =
            (self.previous_pointer, self.pointer)
        else {
            return;
        };
        let center_y = self.viewport.y / 2.0;
        if center_y <= 0.0 {
            return;
        }
        // Screen y grows downward; dragging up moves closer
        let dy = previous.y - current.y;
        let exponent = self.motion_factor * dy / center_y;
        self.dolly(DOLLY_BASE.powf(exponent));
    }

    fn environment_rotate(&mut self, angle: f32, up: Vec3) -> Quat {
        let up = up.normalize_or_zero();
        if up == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        let delta = Quat::from_axis_angle(up, angle.to_radians());
        self.environment = (delta * self.environment).normalize();
        delta
    }

    fn track_pointer(&mut self, x: f32, y: f32) {
        self.previous_pointer = self.pointer.replace(Vec2::new(x, y));
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn trackball() -> TrackballCamera {
        TrackballCamera::new(800, 600)
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let tb = trackball();
        assert!(tb.camera().eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
        assert!(tb.camera().forward().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!((tb.camera().aspect - 800.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn turntable_rotation_keeps_elevation() {
        let mut tb = trackball();
        // Tilt first so the camera is above the horizon
        tb.rotate(Rotation::free(0.0, -30.0));
        let height_before = tb.camera().eye.y;
        assert!(height_before.abs() > 1.0);

        tb.rotate(Rotation::turntable(75.0, Vec3::Y));
        assert!((tb.camera().eye.y - height_before).abs() < EPS);
        assert!((tb.distance() - 10.0).abs() < EPS);
    }

    #[test]
    fn turntable_quarter_turn_moves_eye_to_x() {
        let mut tb = trackball();
        tb.rotate(Rotation::turntable(90.0, Vec3::Y));
        assert!(tb.camera().eye.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn free_rotation_changes_elevation() {
        let mut tb = trackball();
        tb.rotate(Rotation::free(0.0, 30.0));
        let expected = 10.0 * 30.0_f32.to_radians().sin();
        assert!((tb.camera().eye.y.abs() - expected).abs() < EPS);
    }

    #[test]
    fn degenerate_fixed_axis_falls_back_to_view_up() {
        let mut a = trackball();
        let mut b = trackball();
        a.rotate(Rotation::turntable(40.0, Vec3::ZERO));
        b.rotate(Rotation::free(40.0, 0.0));
        assert!(a.camera().eye.abs_diff_eq(b.camera().eye, EPS));
    }

    #[test]
    fn spin_rolls_up_vector_only() {
        let mut tb = trackball();
        tb.spin(90.0);
        assert!(tb.camera().eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
        assert!(tb.camera().up.abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn pan_moves_focus_against_drag() {
        let mut tb = trackball();
        tb.pan(Vec2::new(100.0, 0.0));
        assert!(tb.focus_point().x < 0.0);
        assert!(tb.focus_point().y.abs() < EPS);
        // Eye follows the focus point
        assert!(((tb.camera().eye - tb.focus_point()).length() - 10.0).abs() < EPS);
    }

    #[test]
    fn dolly_divides_distance_and_clamps() {
        let mut tb = trackball();
        tb.dolly(2.0);
        assert!((tb.distance() - 5.0).abs() < EPS);

        tb.dolly(1e9);
        assert!((tb.distance() - CameraOptions::default().min_distance).abs() < EPS);
    }

    #[test]
    fn dolly_ignores_invalid_factors() {
        let mut tb = trackball();
        for factor in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            tb.dolly(factor);
        }
        assert!((tb.distance() - 10.0).abs() < EPS);
    }

    #[test]
    fn tracked_dolly_uses_last_pointer_delta() {
        let mut tb = trackball();
        // Without two samples nothing happens
        tb.dolly_tracked();
        assert!((tb.distance() - 10.0).abs() < EPS);

        tb.track_pointer(400.0, 300.0);
        tb.track_pointer(400.0, 270.0);
        tb.dolly_tracked();
        let expected = 10.0 / DOLLY_BASE.powf(10.0 * 30.0 / 300.0);
        assert!((tb.distance() - expected).abs() < EPS);
    }

    #[test]
    fn environment_rotation_returns_applied_delta() {
        let mut tb = trackball();
        let delta = tb.environment_rotate(90.0, Vec3::Y);
        assert!(delta.abs_diff_eq(Quat::from_rotation_y(90.0_f32.to_radians()), EPS));
        assert!(tb.environment_orientation().abs_diff_eq(delta, EPS));
        // Camera framing is untouched
        assert!(tb.camera().eye.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn environment_rotation_uses_given_axis() {
        let mut tb = trackball();
        let delta = tb.environment_rotate(90.0, Vec3::new(0.0, 0.0, 2.0));
        assert!(delta.abs_diff_eq(Quat::from_rotation_z(90.0_f32.to_radians()), EPS));

        // A zero axis leaves the environment alone
        let delta = tb.environment_rotate(45.0, Vec3::ZERO);
        assert_eq!(delta, Quat::IDENTITY);
        assert!(tb
            .environment_orientation()
            .abs_diff_eq(Quat::from_rotation_z(90.0_f32.to_radians()), EPS));
    }

    #[test]
    fn reset_returns_to_last_fit() {
        let mut tb = trackball();
        tb.fit_to_positions(&[Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
        let fitted_eye = tb.camera().eye;
        assert!(tb.focus_point().abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPS));

        tb.rotate(Rotation::free(45.0, 10.0));
        tb.dolly(3.0);
        tb.reset();
        assert!(tb.camera().eye.abs_diff_eq(fitted_eye, EPS));
    }

    #[test]
    fn fit_ignores_empty_input() {
        let mut tb = trackball();
        tb.fit_to_positions(&[]);
        assert!(tb.focus_point().abs_diff_eq(Vec3::ZERO, EPS));
    }
}
