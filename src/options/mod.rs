//! Runtime configuration with TOML preset support.
//!
//! Camera limits, tween timing, reveal/highlight display settings and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! viewer can be started from a preset file.

mod animation;
mod camera;
mod display;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit limits.
    pub camera: CameraOptions,
    /// Tween durations and easing.
    pub animation: AnimationOptions,
    /// Reveal, highlight and background settings.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the user-tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Io`] if the file cannot be read and
    /// [`ViewError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path).map_err(ViewError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OptionsParse`] if serialization fails and
    /// [`ViewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViewCommand;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[animation]
focus_duration_ms = 400
focus_easing = "cubic_out"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.focus_duration_ms, 400);
        assert_eq!(opts.animation.focus_easing, EasingFunction::CubicOut);
        // Everything else should be default
        assert_eq!(opts.animation.floor_pause_ms, 500);
        assert_eq!(opts.display.revealed_opacity, 0.2);
        assert_eq!(opts.camera.max_distance, 450.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyT"),
            Some(ViewCommand::ToggleElements)
        );
        assert_eq!(
            opts.keybindings.lookup("Digit3"),
            Some(ViewCommand::SelectFloor(2))
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = std::env::temp_dir()
            .join(format!("campus-view-opts-{}", std::process::id()));
        let path = dir.join("dim.toml");
        let mut opts = Options::default();
        opts.display.revealed_opacity = 0.35;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["dim".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir()
            .join(format!("campus-view-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ViewError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
