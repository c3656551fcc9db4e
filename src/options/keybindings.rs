use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeybindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Keys use the `winit::keyboard::KeyCode` debug format: `"KeyG"`,
/// `"Space"`, `"Escape"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"Enter"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ResetCamera, "Enter".into()),
            (KeyAction::ToggleAnimation, "Space".into()),
            (KeyAction::StepAnimationForward, "ArrowRight".into()),
            (KeyAction::StepAnimationBackward, "ArrowLeft".into()),
            (KeyAction::ToggleGrid, "KeyG".into()),
            (KeyAction::ToggleAxes, "KeyX".into()),
            (KeyAction::CycleRenderStyle, "KeyS".into()),
            (KeyAction::ToggleTurntable, "KeyT".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        Self::from_bindings(bindings)
    }
}

/// Deserialized form; the reverse map is rebuilt on conversion.
#[derive(Deserialize)]
#[serde(default)]
struct KeybindingTable {
    bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingTable {
    fn default() -> Self {
        Self {
            bindings: KeybindingOptions::default().bindings,
        }
    }
}

impl From<KeybindingTable> for KeybindingOptions {
    fn from(table: KeybindingTable) -> Self {
        Self::from_bindings(table.bindings)
    }
}

impl KeybindingOptions {
    /// Bindings from an explicit action → key table.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if let Some(previous) =
                self.key_to_action.insert(key.clone(), *action)
            {
                log::warn!(
                    "key '{key}' bound to both {previous:?} and {action:?}"
                );
            }
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Remove the binding for `action`, if any.
    pub fn unbind(&mut self, action: KeyAction) {
        if self.bindings.remove(&action).is_some() {
            self.rebuild_reverse_map();
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
