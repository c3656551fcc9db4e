use serde::{Deserialize, Serialize};

/// Viewer-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "Enter"
/// toggle_animation = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return the camera to its initial framing.
    ResetCamera,
    /// Play or pause animation playback.
    ToggleAnimation,
    /// Advance the animation by one frame.
    StepAnimationForward,
    /// Move the animation back by one frame.
    StepAnimationBackward,
    /// Show or hide the ground grid overlay.
    ToggleGrid,
    /// Show or hide the axes overlay.
    ToggleAxes,
    /// Switch to the next render style.
    CycleRenderStyle,
    /// Switch between turntable and free trackball rotation.
    ToggleTurntable,
    /// Close the viewer.
    Quit,
}
