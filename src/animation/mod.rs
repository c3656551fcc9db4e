//! Animation playback as seen by the interactor.
//!
//! The interactor only needs to know whether playback is active; the
//! [`AnimationSource`] trait is that one query. [`Playback`] is a small
//! shared transport that implements it for applications that do not bring
//! their own animation engine.

mod playback;

use std::cell::Cell;

pub use playback::Playback;

/// Anything that can report whether animation playback is running.
///
/// While this returns `true`, camera gestures are suppressed so user input
/// and keyframed transforms never drive the camera at the same time.
pub trait AnimationSource {
    /// Whether playback is currently active.
    fn is_playing(&self) -> bool;
}

impl AnimationSource for Cell<bool> {
    fn is_playing(&self) -> bool {
        self.get()
    }
}
