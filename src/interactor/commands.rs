//! Application-level collaborators for discrete input: key commands and
//! file drops.

use std::path::PathBuf;

use crate::input::KeyAction;
use crate::options::KeybindingOptions;

/// Resolves key presses to application commands.
pub trait CommandRegistry {
    /// Run the command bound to `key`. Returns whether the key was handled.
    fn dispatch(&mut self, key: &str) -> bool;
}

/// Loads dropped files into the scene.
///
/// Failures are reported through the loader's own channel; the interactor
/// never sees them.
pub trait SceneLoader {
    /// Load (or replace the scene with) `paths`, in order.
    fn load(&mut self, paths: &[PathBuf]);
}

impl<F: FnMut(&[PathBuf])> SceneLoader for F {
    fn load(&mut self, paths: &[PathBuf]) {
        self(paths);
    }
}

/// [`CommandRegistry`] backed by configured keybindings.
///
/// Resolved [`KeyAction`]s are handed to `handler`; what an action does is
/// up to the application.
pub struct KeyCommands<H: FnMut(KeyAction)> {
    bindings: KeybindingOptions,
    handler: H,
}

impl<H: FnMut(KeyAction)> KeyCommands<H> {
    /// Registry resolving keys through `bindings`.
    pub fn new(bindings: KeybindingOptions, handler: H) -> Self {
        Self { bindings, handler }
    }

    /// Current bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Replace the bindings, e.g. after loading a preset.
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }
}

impl<H: FnMut(KeyAction)> CommandRegistry for KeyCommands<H> {
    fn dispatch(&mut self, key: &str) -> bool {
        match self.bindings.lookup(key) {
            Some(action) => {
                log::debug!("key '{key}' → {action:?}");
                (self.handler)(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_key_runs_handler() {
        let mut seen = Vec::new();
        let mut commands =
            KeyCommands::new(KeybindingOptions::default(), |a| seen.push(a));
        assert!(commands.dispatch("Space"));
        assert!(commands.dispatch("Enter"));
        drop(commands);
        assert_eq!(seen, vec![KeyAction::ToggleAnimation, KeyAction::ResetCamera]);
    }

    #[test]
    fn unbound_key_is_not_handled() {
        let mut calls = 0;
        let mut commands =
            KeyCommands::new(KeybindingOptions::default(), |_| calls += 1);
        assert!(!commands.dispatch("KeyZ"));
        assert!(!commands.dispatch(""));
        drop(commands);
        assert_eq!(calls, 0);
    }

    #[test]
    fn replaced_bindings_take_effect() {
        let mut seen = Vec::new();
        let mut commands =
            KeyCommands::new(KeybindingOptions::default(), |a| seen.push(a));
        let mut bindings = commands.bindings().clone();
        bindings.bind(KeyAction::Quit, "KeyQ");
        commands.set_bindings(bindings);

        assert!(!commands.dispatch("Escape"));
        assert!(commands.dispatch("KeyQ"));
        drop(commands);
        assert_eq!(seen, vec![KeyAction::Quit]);
    }

    #[test]
    fn closures_are_scene_loaders() {
        let mut loaded = Vec::new();
        let mut loader = |paths: &[PathBuf]| loaded.extend_from_slice(paths);
        loader.load(&[PathBuf::from("a.glb")]);
        assert_eq!(loaded, vec![PathBuf::from("a.glb")]);
    }
}
