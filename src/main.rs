//! Interactive demo viewer.
//!
//! Opens a bare window whose mouse and keyboard input drive a trackball
//! camera through the [`Interactor`]. Nothing is rendered; camera and
//! playback state are logged instead (run with `RUST_LOG=debug`).
//!
//! ```text
//! viso-interactor [OPTIONS.toml] [FRAME_COUNT]
//! ```
//!
//! While the animation plays it orbits the camera, and drag gestures are
//! suppressed. Space toggles playback, Enter resets the camera, T toggles
//! turntable mode and Escape quits.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use viso_interactor::animation::{AnimationSource, Playback};
use viso_interactor::camera::{
    CameraManipulator, Rotation, SkyboxOrientation, TrackballCamera,
};
use viso_interactor::input::{InputProcessor, KeyAction, RawEvent};
use viso_interactor::interactor::KeyCommands;
use viso_interactor::options::Options;
use viso_interactor::{Interactor, InteractorError};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

const DEFAULT_FRAME_COUNT: usize = 120;
const FRAMES_PER_SECOND: f32 = 24.0;
const INITIAL_SIZE: (u32, u32) = (1280, 800);

/// Overlay toggles with no renderer behind them; tracked so the log shows
/// what a renderer would draw.
#[derive(Debug, Default)]
struct Overlays {
    grid: bool,
    axes: bool,
    render_style: usize,
}

struct ViewerApp {
    window: Option<Arc<Window>>,
    processor: InputProcessor,
    interactor: Interactor<TrackballCamera>,
    playback: Rc<Playback>,
    options: Rc<RefCell<Options>>,
    actions: Rc<RefCell<Vec<KeyAction>>>,
    overlays: Overlays,
    last_frame_time: Instant,
    frame_time_accum: f32,
    last_eye: Vec3,
}

impl ViewerApp {
    fn new(options: Options, frame_count: usize) -> Self {
        let (width, height) = INITIAL_SIZE;

        let mut processor = InputProcessor::new(width, height);
        processor.apply_options(&options);

        let camera =
            TrackballCamera::with_options(&options.camera, width, height);
        let last_eye = camera.camera().eye;

        let playback = Rc::new(Playback::new(frame_count));
        playback.set_looping(true);
        let actions: Rc<RefCell<Vec<KeyAction>>> = Rc::default();

        let mut interactor = Interactor::new(camera);
        interactor.bind_animation_source(&playback);
        interactor.set_skybox(SkyboxOrientation::default());
        interactor.set_scene_loader(|paths: &[PathBuf]| {
            if paths.is_empty() {
                log::info!("drop contained no files");
            }
            for path in paths {
                log::info!("load scene: {}", path.display());
            }
        });
        let queue = Rc::clone(&actions);
        interactor.set_command_registry(KeyCommands::new(
            options.keybindings.clone(),
            move |action| queue.borrow_mut().push(action),
        ));

        let options = Rc::new(RefCell::new(options));
        interactor.bind_option_source(&options);

        Self {
            window: None,
            processor,
            interactor,
            playback,
            options,
            actions,
            overlays: Overlays::default(),
            last_frame_time: Instant::now(),
            frame_time_accum: 0.0,
            last_eye,
        }
    }

    /// Run the key actions queued by the command registry.
    fn run_actions(&mut self, event_loop: &ActiveEventLoop) {
        let actions = std::mem::take(&mut *self.actions.borrow_mut());
        for action in actions {
            match action {
                KeyAction::ResetCamera => {
                    self.interactor.manipulator_mut().reset();
                    log::info!("camera reset");
                }
                KeyAction::ToggleAnimation => {
                    let playing = self.playback.toggle();
                    self.frame_time_accum = 0.0;
                    log::info!("playback {}", if playing { "on" } else { "off" });
                }
                KeyAction::StepAnimationForward => self.step_frame(1),
                KeyAction::StepAnimationBackward => self.step_frame(-1),
                KeyAction::ToggleGrid => {
                    self.overlays.grid = !self.overlays.grid;
                    log::info!("grid: {}", self.overlays.grid);
                }
                KeyAction::ToggleAxes => {
                    self.overlays.axes = !self.overlays.axes;
                    log::info!("axes: {}", self.overlays.axes);
                }
                KeyAction::CycleRenderStyle => {
                    self.overlays.render_style =
                        (self.overlays.render_style + 1) % 3;
                    log::info!("render style {}", self.overlays.render_style);
                }
                KeyAction::ToggleTurntable => {
                    let mut options = self.options.borrow_mut();
                    options.interaction.turntable =
                        !options.interaction.turntable;
                    log::info!("turntable: {}", options.interaction.turntable);
                }
                KeyAction::Quit => event_loop.exit(),
            }
        }
    }

    fn step_frame(&mut self, delta: isize) {
        let before = self.playback.current_frame();
        self.playback.step(delta);
        let after = self.playback.current_frame();
        if after != before {
            self.orbit_frames(after as f32 - before as f32);
        }
        log::debug!("frame {after}/{}", self.playback.frame_count());
    }

    /// Advance playback by wall-clock time.
    fn advance_playback(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        if !self.playback.is_playing() {
            return;
        }

        self.frame_time_accum += dt;
        let frame_duration = 1.0 / FRAMES_PER_SECOND;
        while self.frame_time_accum >= frame_duration {
            self.frame_time_accum -= frame_duration;
            self.playback.step(1);
            self.orbit_frames(1.0);
        }
    }

    /// Animation-driven camera motion. Goes straight to the manipulator,
    /// bypassing the gesture gate.
    fn orbit_frames(&mut self, frames: f32) {
        let frame_count = self.playback.frame_count().max(1) as f32;
        let up = self.options.borrow().interaction.up.to_vec3();
        self.interactor
            .manipulator_mut()
            .rotate(Rotation::turntable(360.0 / frame_count * frames, up));
    }

    fn log_camera_change(&mut self) {
        let eye = self.interactor.manipulator().camera().eye;
        if eye.abs_diff_eq(self.last_eye, 1e-5) {
            return;
        }
        self.last_eye = eye;
        let camera = self.interactor.manipulator();
        log::debug!(
            "camera eye {:?} focus {:?} distance {:.3}",
            eye,
            camera.focus_point(),
            camera.distance(),
        );
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let (width, height) = INITIAL_SIZE;
        let attrs = Window::default_attributes()
            .with_title("Viso Interactor")
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.interactor
                    .manipulator_mut()
                    .resize(size.width, size.height);
                let _ = self.processor.handle_event(RawEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                log::error!("{}", InteractorError::Viewer(e.to_string()));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.interactor
                    .manipulator_mut()
                    .resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                self.processor.release_mouse_state();
            }
            _ => {}
        }

        let Some(raw) = RawEvent::from_window_event(&event) else {
            return;
        };
        for input in self.processor.handle_event(raw) {
            self.interactor.dispatch(input);
        }
        self.run_actions(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(input) = self.processor.flush() {
            self.interactor.dispatch(input);
        }
        self.advance_playback();
        self.log_camera_change();

        if self.playback.is_playing() {
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<Options, InteractorError> {
    match path {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("loaded options from {}", path.display());
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

fn run() -> Result<(), InteractorError> {
    let mut args = std::env::args().skip(1);
    let options_path = args.next().map(PathBuf::from);
    let frame_count = match args.next() {
        Some(arg) => arg.parse().map_err(|_| {
            InteractorError::Viewer(format!("invalid frame count: {arg}"))
        })?,
        None => DEFAULT_FRAME_COUNT,
    };

    let options = load_options(options_path.as_deref())?;
    let mut app = ViewerApp::new(options, frame_count);

    let event_loop =
        EventLoop::new().map_err(|e| InteractorError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop
        .run_app(&mut app)
        .map_err(|e| InteractorError::Viewer(e.to_string()))
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
