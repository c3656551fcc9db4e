//! The interaction mediator between window input and the camera.
//!
//! [`Interactor`] receives [`InputEvent`]s and decides, per event, whether
//! the camera manipulator runs unchanged, is suppressed, or is redirected:
//!
//! - drag gestures are dropped while animation plays (or while any other
//!   registered [`BlockCondition`] holds), so user input never fights the
//!   animation for the camera transform;
//! - rotation honors turntable mode, read fresh from the option source on
//!   every event;
//! - environment rotation also turns the skybox by the same delta;
//! - key presses and file drops go to the application's command registry
//!   and scene loader, ungated.
//!
//! The interactor keeps no decision state: identical events under identical
//! external state always produce identical outcomes.

mod commands;
mod gate;

use std::path::PathBuf;
use std::rc::{Rc, Weak};

use glam::{Vec2, Vec3};

pub use commands::{CommandRegistry, KeyCommands, SceneLoader};
pub use gate::{BlockCondition, Gate};

use crate::animation::AnimationSource;
use crate::camera::{CameraManipulator, Rotation, Skybox, TrackballCamera};
use crate::input::InputEvent;
use crate::options::{InteractionOptions, OptionSource};

/// Reason reported by [`Interactor::blocking_reason`] while the animation
/// source is playing.
pub const ANIMATION_PLAYING: &str = "animation_playing";

/// Camera-interaction mediator.
///
/// Owns the camera manipulator it delegates to and observes (never owns)
/// the animation and option sources through weak handles. A source that
/// has been dropped reads as unbound: not playing, default options.
///
/// # Usage
///
/// ```ignore
/// let playback = Rc::new(Playback::new(frame_count));
/// let options = Rc::new(RefCell::new(Options::default()));
///
/// let mut interactor = Interactor::new(TrackballCamera::new(width, height));
/// interactor.bind_animation_source(&playback);
/// interactor.bind_option_source(&options);
///
/// for event in input_processor.handle_event(raw) {
///     interactor.dispatch(event);
/// }
/// ```
pub struct Interactor<M: CameraManipulator = TrackballCamera> {
    manipulator: M,
    animation: Option<Weak<dyn AnimationSource>>,
    options: Option<Weak<dyn OptionSource>>,
    gate: Gate,
    commands: Option<Box<dyn CommandRegistry>>,
    loader: Option<Box<dyn SceneLoader>>,
    skybox: Option<Box<dyn Skybox>>,
}

impl<M: CameraManipulator> Interactor<M> {
    /// Interactor delegating to `manipulator`, with nothing bound yet.
    pub fn new(manipulator: M) -> Self {
        Self {
            manipulator,
            animation: None,
            options: None,
            gate: Gate::new(),
            commands: None,
            loader: None,
            skybox: None,
        }
    }

    // ── Binding ─────────────────────────────────────────────────────────

    /// Observe `source` for playback state. Replaces any previous binding.
    pub fn bind_animation_source<A: AnimationSource + 'static>(
        &mut self,
        source: &Rc<A>,
    ) {
        let weak: Weak<A> = Rc::downgrade(source);
        let weak: Weak<dyn AnimationSource> = weak;
        self.animation = Some(weak);
    }

    /// Stop observing the animation source.
    pub fn unbind_animation_source(&mut self) {
        self.animation = None;
    }

    /// Observe `source` for interaction options. Replaces any previous
    /// binding.
    pub fn bind_option_source<O: OptionSource + 'static>(
        &mut self,
        source: &Rc<O>,
    ) {
        let weak: Weak<O> = Rc::downgrade(source);
        let weak: Weak<dyn OptionSource> = weak;
        self.options = Some(weak);
    }

    /// Stop observing the option source.
    pub fn unbind_option_source(&mut self) {
        self.options = None;
    }

    /// Registry that key presses are forwarded to.
    pub fn set_command_registry(
        &mut self,
        registry: impl CommandRegistry + 'static,
    ) {
        self.commands = Some(Box::new(registry));
    }

    /// Loader that dropped files are forwarded to.
    pub fn set_scene_loader(&mut self, loader: impl SceneLoader + 'static) {
        self.loader = Some(Box::new(loader));
    }

    /// Skybox kept in lockstep with environment rotation.
    pub fn set_skybox(&mut self, skybox: impl Skybox + 'static) {
        self.skybox = Some(Box::new(skybox));
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The camera manipulator.
    pub fn manipulator(&self) -> &M {
        &self.manipulator
    }

    /// Mutable access to the camera manipulator, for programmatic camera
    /// changes (reset, fit) that bypass the gate.
    pub fn manipulator_mut(&mut self) -> &mut M {
        &mut self.manipulator
    }

    /// The bound skybox, if any.
    pub fn skybox(&self) -> Option<&dyn Skybox> {
        self.skybox.as_deref()
    }

    /// Additional block conditions.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Mutable access to the additional block conditions.
    pub fn gate_mut(&mut self) -> &mut Gate {
        &mut self.gate
    }

    // ── Gate ────────────────────────────────────────────────────────────

    /// Why gestures are currently blocked, if they are.
    ///
    /// Animation playback is checked first, then the gate's conditions in
    /// registration order.
    pub fn blocking_reason(&self) -> Option<&'static str> {
        if self.animation_playing() {
            return Some(ANIMATION_PLAYING);
        }
        self.gate.blocking_tag()
    }

    /// Whether continuous camera gestures are currently suppressed.
    pub fn is_user_interaction_blocked(&self) -> bool {
        self.blocking_reason().is_some()
    }

    fn animation_playing(&self) -> bool {
        self.animation
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|source| source.is_playing())
    }

    /// Logs and returns `true` when `gesture` must be dropped.
    fn suppressed(&self, gesture: &str) -> bool {
        match self.blocking_reason() {
            Some(reason) => {
                log::trace!("{gesture} suppressed: {reason}");
                true
            }
            None => false,
        }
    }

    /// Turntable flag and up axis, read fresh from the option source.
    /// Unbound or dropped sources read as the default options.
    fn interaction_mode(&self) -> (bool, Vec3) {
        match self.options.as_ref().and_then(Weak::upgrade) {
            Some(options) => (options.turntable_enabled(), options.up_axis()),
            None => {
                let defaults = InteractionOptions::default();
                (defaults.turntable, defaults.up.to_vec3())
            }
        }
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    /// Route one input event to its handler.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress { key } => self.on_key_press(&key),
            InputEvent::Char { .. } => self.on_char(),
            InputEvent::Timer => self.on_timer(),
            InputEvent::DropFiles { paths } => self.on_drop_files(&paths),
            InputEvent::PointerMoved { x, y } => {
                self.manipulator.track_pointer(x, y);
            }
            InputEvent::Rotate { azimuth, elevation } => {
                self.rotate(azimuth, elevation);
            }
            InputEvent::Spin { angle } => self.spin(angle),
            InputEvent::Pan { delta } => self.pan(delta),
            InputEvent::Dolly { factor: None } => self.dolly(),
            InputEvent::Dolly {
                factor: Some(factor),
            } => self.dolly_by(factor),
            InputEvent::EnvironmentRotate { angle } => {
                self.environment_rotate(angle);
            }
        }
    }

    // ── Discrete input ──────────────────────────────────────────────────

    /// Forward a key press to the command registry. Unbound keys are
    /// ignored. Never gated: playback stays controllable while it runs.
    pub fn on_key_press(&mut self, key: &str) {
        let handled = self
            .commands
            .as_mut()
            .is_some_and(|registry| registry.dispatch(key));
        if !handled {
            log::debug!("unbound key '{key}'");
        }
    }

    /// Character input is discarded.
    #[allow(clippy::unused_self)]
    pub fn on_char(&self) {}

    /// Timer ticks are discarded; playback timing belongs to the animation
    /// source.
    #[allow(clippy::unused_self)]
    pub fn on_timer(&self) {}

    /// Hand dropped files, in order, to the scene loader. Never gated.
    pub fn on_drop_files(&mut self, paths: &[PathBuf]) {
        match self.loader.as_mut() {
            Some(loader) => {
                log::debug!("loading {} dropped file(s)", paths.len());
                loader.load(paths);
            }
            None => log::debug!("no scene loader bound; drop ignored"),
        }
    }

    // ── Gestures ────────────────────────────────────────────────────────

    /// Orbit the camera, constrained to azimuth around the up axis when
    /// turntable mode is on.
    pub fn rotate(&mut self, azimuth: f32, elevation: f32) {
        if self.suppressed("rotate") {
            return;
        }
        let (turntable, up) = self.interaction_mode();
        let rotation = if turntable {
            Rotation::turntable(azimuth, up)
        } else {
            Rotation::free(azimuth, elevation)
        };
        self.manipulator.rotate(rotation);
    }

    /// Roll the camera around its view direction.
    pub fn spin(&mut self, angle: f32) {
        if self.suppressed("spin") {
            return;
        }
        self.manipulator.spin(angle);
    }

    /// Translate the camera parallel to the view plane.
    pub fn pan(&mut self, delta: Vec2) {
        if self.suppressed("pan") {
            return;
        }
        self.manipulator.pan(delta);
    }

    /// Dolly by the manipulator's tracked pointer motion.
    pub fn dolly(&mut self) {
        if self.suppressed("dolly") {
            return;
        }
        self.manipulator.dolly_tracked();
    }

    /// Dolly by an explicit factor. Non-positive or non-finite factors are
    /// ignored.
    pub fn dolly_by(&mut self, factor: f32) {
        if self.suppressed("dolly") {
            return;
        }
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("ignoring dolly factor {factor}");
            return;
        }
        self.manipulator.dolly(factor);
    }

    /// Rotate the environment around the configured up axis and turn the
    /// skybox by the same delta.
    pub fn environment_rotate(&mut self, angle: f32) {
        if self.suppressed("environment rotate") {
            return;
        }
        let (_, up) = self.interaction_mode();
        let delta = self.manipulator.environment_rotate(angle, up);
        if let Some(skybox) = self.skybox.as_mut() {
            skybox.rotate(delta);
        }
    }
}

impl<M: CameraManipulator + std::fmt::Debug> std::fmt::Debug for Interactor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interactor")
            .field("manipulator", &self.manipulator)
            .field("animation_bound", &self.animation.is_some())
            .field("options_bound", &self.options.is_some())
            .field("gate", &self.gate)
            .field("has_commands", &self.commands.is_some())
            .field("has_loader", &self.loader.is_some())
            .field("has_skybox", &self.skybox.is_some())
            .finish()
    }
}
