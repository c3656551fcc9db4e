use std::path::PathBuf;

use glam::Vec2;

/// Interaction events delivered to the [`Interactor`](crate::Interactor).
///
/// Produced by an [`InputProcessor`](super::InputProcessor) (or any other
/// dispatcher) and consumed synchronously, one at a time.
///
/// # Example
///
/// ```ignore
/// for event in input_processor.handle_event(raw) {
///     interactor.dispatch(event);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyPress {
        /// Symbolic key identifier (`winit::keyboard::KeyCode` debug form).
        key: String,
    },
    /// Text input produced by a key press.
    Char {
        /// The character typed.
        ch: char,
    },
    /// Periodic timer tick from the windowing layer.
    Timer,
    /// Files dropped onto the viewport, in drop order.
    DropFiles {
        /// Dropped file-system paths.
        paths: Vec<PathBuf>,
    },
    /// Cursor moved; feeds the manipulator's motion tracking.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Orbit the camera.
    Rotate {
        /// Rotation around the up direction, in degrees.
        azimuth: f32,
        /// Rotation around the camera's right axis, in degrees.
        elevation: f32,
    },
    /// Roll the camera around its view direction.
    Spin {
        /// Roll angle in degrees.
        angle: f32,
    },
    /// Translate the camera parallel to the view plane.
    Pan {
        /// Drag delta in physical pixels.
        delta: Vec2,
    },
    /// Move the camera toward (factor > 1) or away from its focus point.
    Dolly {
        /// Explicit scale factor, or `None` to derive it from tracked
        /// pointer motion.
        factor: Option<f32>,
    },
    /// Rotate the environment lighting and skybox around the up axis.
    EnvironmentRotate {
        /// Rotation angle in degrees.
        angle: f32,
    },
}

impl InputEvent {
    /// Whether this event is a continuous camera gesture subject to the
    /// interaction gate.
    #[must_use]
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            Self::Rotate { .. }
                | Self::Spin { .. }
                | Self::Pan { .. }
                | Self::Dolly { .. }
                | Self::EnvironmentRotate { .. }
        )
    }
}
