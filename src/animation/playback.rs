//! Frame-based playback transport.

use std::cell::Cell;

use super::AnimationSource;

/// Minimal playback transport shared between the application and the
/// interactor.
///
/// All methods take `&self` so the transport can live in an
/// [`Rc`](std::rc::Rc): key commands mutate it while the interactor observes
/// it through a weak handle.
#[derive(Debug)]
pub struct Playback {
    frame_count: usize,
    current_frame: Cell<usize>,
    playing: Cell<bool>,
    looping: Cell<bool>,
}

impl Playback {
    /// Paused transport over `frame_count` frames, positioned at frame 0.
    #[must_use]
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            current_frame: Cell::new(0),
            playing: Cell::new(false),
            looping: Cell::new(true),
        }
    }

    /// Start playback. A transport without frames never plays.
    pub fn play(&self) {
        if self.frame_count == 0 {
            log::debug!("ignoring play request: no frames");
            return;
        }
        self.playing.set(true);
    }

    /// Pause playback, keeping the current frame.
    pub fn pause(&self) {
        self.playing.set(false);
    }

    /// Toggle between playing and paused. Returns the new playing state.
    pub fn toggle(&self) -> bool {
        if self.playing.get() {
            self.pause();
        } else {
            self.play();
        }
        self.playing.get()
    }

    /// Pause and rewind to the first frame.
    pub fn stop(&self) {
        self.playing.set(false);
        self.current_frame.set(0);
    }

    /// Move `delta` frames forward (or backward when negative).
    ///
    /// Wraps around when looping, clamps to the valid range otherwise.
    pub fn step(&self, delta: isize) {
        if self.frame_count == 0 {
            return;
        }
        let count = self.frame_count as isize;
        let target = self.current_frame.get() as isize + delta;
        let frame = if self.looping.get() {
            target.rem_euclid(count)
        } else {
            target.clamp(0, count - 1)
        };
        self.current_frame.set(frame as usize);
    }

    /// Jump to `frame`, clamped to the last frame.
    pub fn seek(&self, frame: usize) {
        self.current_frame
            .set(frame.min(self.frame_count.saturating_sub(1)));
    }

    /// Enable or disable wrap-around at either end of the frame range.
    pub fn set_looping(&self, looping: bool) {
        self.looping.set(looping);
    }

    /// Index of the current frame.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame.get()
    }

    /// Total number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Whether stepping wraps around.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping.get()
    }
}

impl AnimationSource for Playback {
    fn is_playing(&self) -> bool {
        self.playing.get()
    }
}
