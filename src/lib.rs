// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-interaction mediator for interactive 3D scene viewers.
//!
//! Sits between the windowing layer and a trackball camera and decides,
//! per input event, whether the default camera manipulation runs, is
//! suppressed while an animation is playing, or is altered (turntable
//! rotation, skybox-synchronized environment rotation).
//!
//! # Key entry points
//!
//! - [`interactor::Interactor`] - the mediator itself
//! - [`camera::CameraManipulator`] - the trackball capability it gates, with
//!   [`camera::TrackballCamera`] as the default implementation
//! - [`input::InputProcessor`] - turns raw window events into
//!   [`input::InputEvent`]s
//! - [`options::Options`] - runtime configuration (interaction, camera,
//!   keybindings) with TOML preset support
//! - [`animation::Playback`] - shared playback transport that blocks camera
//!   gestures while it plays
//!
//! # Ownership
//!
//! The animation and option sources are owned by the application and
//! shared through [`std::rc::Rc`]. The interactor only observes them through
//! weak handles, so dropping a source simply unbinds it.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod interactor;
pub mod options;

pub use error::InteractorError;
pub use input::InputEvent;
pub use interactor::Interactor;
