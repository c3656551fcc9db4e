//! Converts raw platform events into interaction events.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! the active drag gesture, modifier keys, pending file drops). It is the
//! only thing that sits between raw window events and the interactor's
//! [`dispatch`](crate::Interactor::dispatch) method.

use std::path::PathBuf;

use glam::Vec2;

use super::event::InputEvent;
use super::raw::{MouseButton, RawEvent};
use crate::options::Options;

/// Degrees of rotation for a drag across the full viewport, before the
/// motion factor is applied.
const DEGREES_PER_VIEWPORT: f32 = 20.0;

/// Base of the exponential dolly curve.
const DOLLY_BASE: f32 = 1.1;

/// Drag gesture chosen at button press from the button and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Rotate,
    Spin,
    Pan,
    Dolly,
    EnvironmentRotate,
}

impl Gesture {
    fn select(button: MouseButton, shift: bool, ctrl: bool) -> Self {
        match (button, shift, ctrl) {
            (MouseButton::Left, false, false) => Self::Rotate,
            (MouseButton::Left, true, false) | (MouseButton::Middle, _, _) => {
                Self::Pan
            }
            (MouseButton::Left, false, true) => Self::Spin,
            (MouseButton::Left, true, true) | (MouseButton::Right, false, _) => {
                Self::Dolly
            }
            (MouseButton::Right, true, _) => Self::EnvironmentRotate,
        }
    }
}

/// Converts [`RawEvent`]s into [`InputEvent`]s.
///
/// Button mapping follows the usual trackball conventions: left drag
/// rotates, shift+left or middle pans, ctrl+left spins, right (or
/// ctrl+shift+left) dollies, and shift+right rotates the environment.
///
/// # Usage
///
/// ```ignore
/// for event in input_processor.handle_event(raw) {
///     interactor.dispatch(event);
/// }
/// // Once per event-loop iteration:
/// if let Some(event) = input_processor.flush() {
///     interactor.dispatch(event);
/// }
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor: Option<Vec2>,
    /// Button that started the current drag.
    active_button: Option<MouseButton>,
    /// Gesture bound to the current drag.
    gesture: Option<Gesture>,
    shift_pressed: bool,
    ctrl_pressed: bool,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    motion_factor: f32,
    mouse_wheel_motion_factor: f32,
    invert_zoom: bool,
    /// Dropped files waiting to be delivered as one batch.
    pending_drops: Vec<PathBuf>,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given size, with default
    /// options.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut processor = Self {
            cursor: None,
            active_button: None,
            gesture: None,
            shift_pressed: false,
            ctrl_pressed: false,
            viewport: Vec2::new(width as f32, height as f32),
            motion_factor: 0.0,
            mouse_wheel_motion_factor: 0.0,
            invert_zoom: false,
            pending_drops: Vec::new(),
        };
        processor.apply_options(&Options::default());
        processor
    }

    /// Pick up motion scaling and zoom direction from `options`.
    pub fn apply_options(&mut self, options: &Options) {
        self.motion_factor = options.camera.motion_factor;
        self.mouse_wheel_motion_factor =
            options.camera.mouse_wheel_motion_factor;
        self.invert_zoom = options.interaction.invert_zoom;
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport.x as u32, self.viewport.y as u32)
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Release the active drag without emitting anything.
    pub fn release_mouse_state(&mut self) {
        self.active_button = None;
        self.gesture = None;
    }

    /// Process a raw event and return the interaction events it produces.
    ///
    /// File drops are held back and delivered as a single
    /// [`InputEvent::DropFiles`] ahead of the next non-drop event, or by
    /// [`flush`](Self::flush).
    pub fn handle_event(&mut self, event: RawEvent) -> Vec<InputEvent> {
        if let RawEvent::FileDropped { path } = event {
            self.pending_drops.push(path);
            return Vec::new();
        }

        let mut events: Vec<InputEvent> = self.flush().into_iter().collect();
        match event {
            RawEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y), &mut events);
            }
            RawEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
            }
            RawEvent::Scroll { delta } => {
                events.push(InputEvent::Dolly {
                    factor: Some(self.wheel_factor(delta)),
                });
            }
            RawEvent::ModifiersChanged { shift, ctrl } => {
                self.shift_pressed = shift;
                self.ctrl_pressed = ctrl;
            }
            RawEvent::Key { key, pressed, text } => {
                if pressed {
                    events.push(InputEvent::KeyPress { key });
                    if let Some(ch) = text {
                        events.push(InputEvent::Char { ch });
                    }
                }
            }
            RawEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width as f32, height as f32);
            }
            RawEvent::Tick => events.push(InputEvent::Timer),
            RawEvent::FileDropped { .. } => {}
        }
        events
    }

    /// Deliver any pending file drops as one batch.
    pub fn flush(&mut self) -> Option<InputEvent> {
        if self.pending_drops.is_empty() {
            return None;
        }
        Some(InputEvent::DropFiles {
            paths: std::mem::take(&mut self.pending_drops),
        })
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            // A second button during a drag does not change the gesture
            if self.active_button.is_none() {
                self.active_button = Some(button);
                self.gesture = Some(Gesture::select(
                    button,
                    self.shift_pressed,
                    self.ctrl_pressed,
                ));
            }
        } else if self.active_button == Some(button) {
            self.release_mouse_state();
        }
    }

    fn handle_cursor_moved(&mut self, pos: Vec2, events: &mut Vec<InputEvent>) {
        let previous = self.cursor.replace(pos);
        events.push(InputEvent::PointerMoved { x: pos.x, y: pos.y });

        let (Some(gesture), Some(previous)) = (self.gesture, previous) else {
            return;
        };
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return;
        }

        let delta = pos - previous;
        let event = match gesture {
            Gesture::Rotate => InputEvent::Rotate {
                azimuth: self.azimuth_for(delta.x),
                // Screen y grows downward
                elevation: delta.y * DEGREES_PER_VIEWPORT / self.viewport.y
                    * self.motion_factor,
            },
            Gesture::Spin => InputEvent::Spin {
                angle: self.spin_angle(previous, pos),
            },
            Gesture::Pan => InputEvent::Pan { delta },
            Gesture::Dolly => InputEvent::Dolly { factor: None },
            Gesture::EnvironmentRotate => InputEvent::EnvironmentRotate {
                angle: self.azimuth_for(delta.x),
            },
        };
        events.push(event);
    }

    fn azimuth_for(&self, dx: f32) -> f32 {
        -dx * DEGREES_PER_VIEWPORT / self.viewport.x * self.motion_factor
    }

    /// Change in the cursor's polar angle around the viewport center.
    fn spin_angle(&self, from: Vec2, to: Vec2) -> f32 {
        let center = self.viewport * 0.5;
        let a = from - center;
        let b = to - center;
        // Flip y so positive angles are counter-clockwise on screen
        let old = (-a.y).atan2(a.x);
        let new = (-b.y).atan2(b.x);
        let mut angle = (new - old).to_degrees();
        if angle > 180.0 {
            angle -= 360.0;
        } else if angle <= -180.0 {
            angle += 360.0;
        }
        angle
    }

    fn wheel_factor(&self, delta: f32) -> f32 {
        let exponent =
            0.2 * self.motion_factor * self.mouse_wheel_motion_factor * delta;
        let exponent = if self.invert_zoom { -exponent } else { exponent };
        DOLLY_BASE.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f32, y: f32) -> RawEvent {
        RawEvent::CursorMoved { x, y }
    }

    fn press(button: MouseButton) -> RawEvent {
        RawEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> RawEvent {
        RawEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn modifiers(shift: bool, ctrl: bool) -> RawEvent {
        RawEvent::ModifiersChanged { shift, ctrl }
    }

    /// Press `button`, then drag from (100, 100) to `to`; returns the
    /// events produced by the final move.
    fn drag(
        processor: &mut InputProcessor,
        button: MouseButton,
        to: Vec2,
    ) -> Vec<InputEvent> {
        let _ = processor.handle_event(cursor(100.0, 100.0));
        let _ = processor.handle_event(press(button));
        processor.handle_event(cursor(to.x, to.y))
    }

    #[test]
    fn cursor_move_without_button_only_tracks() {
        let mut processor = InputProcessor::new(800, 600);
        let events = processor.handle_event(cursor(10.0, 20.0));
        assert_eq!(events, vec![InputEvent::PointerMoved { x: 10.0, y: 20.0 }]);
    }

    #[test]
    fn left_drag_rotates_with_scaled_deltas() {
        let mut processor = InputProcessor::new(800, 600);
        let events =
            drag(&mut processor, MouseButton::Left, Vec2::new(140.0, 130.0));

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerMoved { .. }));
        let InputEvent::Rotate { azimuth, elevation } = events[1] else {
            panic!("expected rotate, got {:?}", events[1]);
        };
        // 40 px of 800 at motion factor 10 → 10°, sign flipped
        assert!((azimuth + 10.0).abs() < 1e-4);
        // 30 px of 600 → 10°
        assert!((elevation - 10.0).abs() < 1e-4);
    }

    #[test]
    fn modifiers_select_gesture_at_press() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = processor.handle_event(modifiers(true, false));
        let events =
            drag(&mut processor, MouseButton::Left, Vec2::new(110.0, 95.0));
        assert_eq!(
            events[1],
            InputEvent::Pan {
                delta: Vec2::new(10.0, -5.0)
            }
        );

        // Releasing shift mid-drag keeps panning
        let _ = processor.handle_event(modifiers(false, false));
        let events = processor.handle_event(cursor(120.0, 95.0));
        assert!(matches!(events[1], InputEvent::Pan { .. }));
    }

    #[test]
    fn ctrl_left_drag_spins() {
        let mut processor = InputProcessor::new(200, 200);
        let _ = processor.handle_event(modifiers(false, true));
        // From right of center to above center: a quarter turn
        let _ = processor.handle_event(cursor(200.0, 100.0));
        let _ = processor.handle_event(press(MouseButton::Left));
        let events = processor.handle_event(cursor(100.0, 0.0));
        let InputEvent::Spin { angle } = events[1] else {
            panic!("expected spin, got {:?}", events[1]);
        };
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn right_drag_dollies_from_tracked_motion() {
        let mut processor = InputProcessor::new(800, 600);
        let events =
            drag(&mut processor, MouseButton::Right, Vec2::new(100.0, 80.0));
        assert_eq!(events[1], InputEvent::Dolly { factor: None });
    }

    #[test]
    fn shift_right_drag_rotates_environment() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = processor.handle_event(modifiers(true, false));
        let events =
            drag(&mut processor, MouseButton::Right, Vec2::new(60.0, 100.0));
        let InputEvent::EnvironmentRotate { angle } = events[1] else {
            panic!("expected environment rotate, got {:?}", events[1]);
        };
        assert!((angle - 10.0).abs() < 1e-4);
    }

    #[test]
    fn middle_drag_pans_regardless_of_modifiers() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = processor.handle_event(modifiers(true, true));
        let events =
            drag(&mut processor, MouseButton::Middle, Vec2::new(101.0, 100.0));
        assert!(matches!(events[1], InputEvent::Pan { .. }));
    }

    #[test]
    fn release_ends_the_drag() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = drag(&mut processor, MouseButton::Left, Vec2::new(110.0, 100.0));
        assert!(processor.is_dragging());

        // Releasing a different button keeps the drag alive
        let _ = processor.handle_event(release(MouseButton::Right));
        assert!(processor.is_dragging());

        let _ = processor.handle_event(release(MouseButton::Left));
        assert!(!processor.is_dragging());
        let events = processor.handle_event(cursor(130.0, 100.0));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn scroll_dollies_by_exponential_factor() {
        let mut processor = InputProcessor::new(800, 600);
        let events = processor.handle_event(RawEvent::Scroll { delta: 1.0 });
        let InputEvent::Dolly { factor: Some(factor) } = events[0] else {
            panic!("expected dolly, got {:?}", events[0]);
        };
        assert!((factor - 1.1_f32.powf(2.0)).abs() < 1e-5);

        let mut options = Options::default();
        options.interaction.invert_zoom = true;
        processor.apply_options(&options);
        let events = processor.handle_event(RawEvent::Scroll { delta: 1.0 });
        let InputEvent::Dolly { factor: Some(inverted) } = events[0] else {
            panic!("expected dolly, got {:?}", events[0]);
        };
        assert!((inverted * factor - 1.0).abs() < 1e-5);
    }

    #[test]
    fn key_press_emits_key_then_char() {
        let mut processor = InputProcessor::new(800, 600);
        let events = processor.handle_event(RawEvent::Key {
            key: "KeyG".into(),
            pressed: true,
            text: Some('g'),
        });
        assert_eq!(
            events,
            vec![
                InputEvent::KeyPress { key: "KeyG".into() },
                InputEvent::Char { ch: 'g' },
            ]
        );

        let released = processor.handle_event(RawEvent::Key {
            key: "KeyG".into(),
            pressed: false,
            text: None,
        });
        assert!(released.is_empty());
    }

    #[test]
    fn dropped_files_are_batched_in_order() {
        let mut processor = InputProcessor::new(800, 600);
        for name in ["a.glb", "b.obj"] {
            let events = processor.handle_event(RawEvent::FileDropped {
                path: PathBuf::from(name),
            });
            assert!(events.is_empty());
        }

        let events = processor.handle_event(RawEvent::Tick);
        assert_eq!(
            events,
            vec![
                InputEvent::DropFiles {
                    paths: vec![PathBuf::from("a.glb"), PathBuf::from("b.obj")],
                },
                InputEvent::Timer,
            ]
        );
        assert_eq!(processor.flush(), None);
    }

    #[test]
    fn flush_delivers_pending_drops() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = processor.handle_event(RawEvent::FileDropped {
            path: PathBuf::from("scene.gltf"),
        });
        assert_eq!(
            processor.flush(),
            Some(InputEvent::DropFiles {
                paths: vec![PathBuf::from("scene.gltf")],
            })
        );
    }

    #[test]
    fn zero_sized_viewport_suppresses_gestures() {
        let mut processor = InputProcessor::new(800, 600);
        let _ = processor.handle_event(RawEvent::Resized {
            width: 0,
            height: 0,
        });
        assert_eq!(processor.viewport(), (0, 0));
        let events =
            drag(&mut processor, MouseButton::Left, Vec2::new(150.0, 100.0));
        assert_eq!(events.len(), 1);
    }
}
