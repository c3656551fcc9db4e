//! Centralized viewer options with TOML preset support.
//!
//! Interaction mode, camera control parameters and keybindings are
//! consolidated here. Options serialize to/from TOML so presets can be
//! stored on disk and swapped at runtime.

mod camera;
mod interaction;
mod keybindings;
mod source;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::{InteractionOptions, UpAxis};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use source::OptionSource;

use crate::error::InteractorError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Gesture interpretation (turntable mode, up axis).
    pub interaction: InteractionOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, InteractorError> {
        let content =
            std::fs::read_to_string(path).map_err(InteractorError::Io)?;
        toml::from_str(&content)
            .map_err(|e| InteractorError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), InteractorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InteractorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(InteractorError::Io)?;
        }
        std::fs::write(path, content).map_err(InteractorError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
