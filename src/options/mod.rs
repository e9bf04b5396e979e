//! Centralized showroom options with TOML preset support.
//!
//! Camera placement, orbit limits, focus-move timing, scene content and key
//! bindings are consolidated here. Options serialize to/from TOML; every
//! section uses `#[serde(default)]` so partial files work.

mod camera;
mod controls;
mod focus;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlsOptions;
pub use focus::FocusOptions;
pub use keybindings::KeybindingOptions;
pub use scene::{ContactShadowOptions, ModelOptions, SceneOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[focus]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera placement and projection.
    pub camera: CameraOptions,
    /// Orbit controller limits and sensitivity.
    pub controls: ControlsOptions,
    /// Click-to-focus animation timing.
    pub focus: FocusOptions,
    /// Scene content.
    pub scene: SceneOptions,
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

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[focus]
duration_secs = 0.75
easing = "none"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.focus.duration_secs, 0.75);
        assert_eq!(opts.focus.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.camera, CameraOptions::default());
        assert_eq!(opts.scene.models.len(), 2);
    }

    #[test]
    fn canvas_settings_default_and_override() {
        let opts = Options::default();
        assert_eq!(opts.scene.background, "#f0f0f0");
        assert!(opts.scene.shadows);

        let opts = Options::from_toml("[scene]\nshadows = false\n").unwrap();
        assert!(!opts.scene.shadows);
        assert_eq!(opts.scene.background, "#f0f0f0");
        assert_eq!(opts.scene.models.len(), 2);
    }

    #[test]
    fn unknown_easing_is_a_parse_error() {
        let err = Options::from_toml("[focus]\neasing = \"bounce\"\n").unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn models_override_replaces_list() {
        let toml_str = r#"
[[scene.models]]
name = "helmet"
asset = "/helmet.glb"
position = [1.0, 0.0, 0.0]
focus = { camera = [2.0, 1.0, 2.0], look_at = [1.0, 0.0, 0.0] }
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scene.models.len(), 1);
        let helmet = &opts.scene.models[0];
        assert_eq!(helmet.scale, 1.0);
        assert_eq!(helmet.bounds_radius, 1.0);
        assert!(helmet.focus.is_some());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::ClearFocus));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_are_searchable() {
        let opts = Options::from_toml("[keybindings.bindings]\nreset_view = \"Home\"\n")
            .unwrap();
        assert_eq!(opts.keybindings.lookup("Home"), Some(KeyAction::ResetView));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("vantage-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.focus.duration_secs = 2.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("focus"));
        assert!(props.contains_key("scene"));
        assert!(!props.contains_key("keybindings"));

        let focus = &props["focus"]["properties"];
        assert!(focus.get("duration_secs").is_some());
        assert!(focus.get("easing").is_some());
        let scene = &props["scene"]["properties"];
        assert!(scene.get("models").is_none());
    }
}
