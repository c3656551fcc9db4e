//! Input handling: raw window events, the interaction events derived from
//! them, and the processor that converts one into the other.

/// Interaction events consumed by the interactor.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into interaction events.
pub mod processor;
/// Platform-agnostic window events.
pub mod raw;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use raw::{MouseButton, RawEvent};
