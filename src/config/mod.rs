//! Configuration file support for deckscriber.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/deckscriber/config.toml`. Settings include brush defaults,
//! the color palette, shortcut behavior and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{BrushConfig, EngineConfig, PaletteConfig, ShortcutsConfig};

use crate::draw::{Color, Palette, palette::MAX_PALETTE_LEN};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_color = "ocean"
/// default_size = 6.0
/// default_mode = "arrow"
///
/// [palette]
/// colors = ["#ff595e", "#1982c4", [0, 0, 0]]
///
/// [shortcuts]
/// enabled = true
/// ignore_editable_targets = true
///
/// [keybindings]
/// clear_canvas = ["Shift+C"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, size, simplification, tool)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Colors addressed by the digit keys
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Keyboard shortcut behavior
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,

    /// Engine notification handling
    #[serde(default)]
    pub engine: EngineConfig,

    /// Key chords for each action
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced with defaults and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.default_size`: 1.0 - 64.0
    /// - `palette.colors`: 1 - 9 valid entries
    fn validate_and_clamp(&mut self) {
        // Size: 1.0 - 64.0
        if !(1.0..=64.0).contains(&self.brush.default_size) {
            log::warn!(
                "Invalid default_size {:.1}, clamping to 1.0-64.0 range",
                self.brush.default_size
            );
            // NaN falls through clamp unchanged
            self.brush.default_size = if self.brush.default_size.is_nan() {
                4.0
            } else {
                self.brush.default_size.clamp(1.0, 64.0)
            };
        }

        let before = self.palette.colors.len();
        self.palette.colors.retain(|spec| {
            let valid = spec.try_to_color().is_some();
            if !valid {
                log::warn!("Dropping invalid palette color {:?}", spec);
            }
            valid
        });

        if self.palette.colors.is_empty() {
            log::warn!(
                "Palette has no usable colors ({} configured), falling back to defaults",
                before
            );
            self.palette.colors = types::default_palette_colors();
        } else if self.palette.colors.len() > MAX_PALETTE_LEN {
            log::warn!(
                "Palette has {} colors, only the first {} are reachable from the digit keys",
                self.palette.colors.len(),
                MAX_PALETTE_LEN
            );
            self.palette.colors.truncate(MAX_PALETTE_LEN);
        }

        if let Some(spec) = &self.brush.default_color {
            if spec.try_to_color().is_none() {
                log::warn!(
                    "Invalid default_color {:?}, falling back to first palette color",
                    spec
                );
                self.brush.default_color = None;
            }
        }
    }

    /// Builds the palette described by this configuration.
    pub fn palette(&self) -> Palette {
        let colors: Vec<Color> = self
            .palette
            .colors
            .iter()
            .filter_map(ColorSpec::try_to_color)
            .collect();
        Palette::new(colors).unwrap_or_default()
    }

    /// Initial brush color: the configured default, else the first palette color.
    pub fn initial_color(&self) -> Color {
        self.brush
            .default_color
            .as_ref()
            .and_then(ColorSpec::try_to_color)
            .unwrap_or_else(|| self.palette().first())
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/deckscriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("deckscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{CORAL, OCEAN};
    use crate::input::LogicalMode;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.brush.default_size, 4.0);
        assert!(config.brush.simplify);
        assert_eq!(config.brush.default_mode, LogicalMode::Draw);
        assert_eq!(config.palette().len(), 7);
        assert_eq!(config.initial_color(), CORAL);
        assert!(config.shortcuts.enabled);
        assert!(!config.shortcuts.ignore_editable_targets);
        assert!(config.engine.track_state);
    }

    #[test]
    fn parses_sections() {
        let config = Config::from_toml(
            r##"
            [brush]
            default_color = "#1982c4"
            default_size = 8.0
            default_mode = "arrow"

            [palette]
            colors = ["red", [0, 0, 0]]

            [keybindings]
            clear_canvas = ["Shift+C"]
            "##,
        )
        .unwrap();

        assert_eq!(config.initial_color(), OCEAN);
        assert_eq!(config.brush.default_size, 8.0);
        assert_eq!(config.brush.default_mode, LogicalMode::Arrow);
        assert_eq!(config.palette().len(), 2);
        assert_eq!(config.keybindings.clear_canvas, vec!["Shift+C".to_string()]);
        assert_eq!(config.keybindings.undo, vec!["Ctrl+Z", "Meta+Z"]);
    }

    #[test]
    fn clamps_out_of_range_size() {
        let config = Config::from_toml("[brush]\ndefault_size = 500.0").unwrap();
        assert_eq!(config.brush.default_size, 64.0);
        let config = Config::from_toml("[brush]\ndefault_size = 0.1").unwrap();
        assert_eq!(config.brush.default_size, 1.0);
    }

    #[test]
    fn invalid_palette_falls_back_to_defaults() {
        let config = Config::from_toml("[palette]\ncolors = [\"nope\"]").unwrap();
        assert_eq!(config.palette(), Palette::default());
    }

    #[test]
    fn oversized_palette_is_truncated() {
        let colors = vec!["\"red\""; MAX_PALETTE_LEN + 2].join(",");
        let config = Config::from_toml(&format!("[palette]\ncolors = [{colors}]")).unwrap();
        assert_eq!(config.palette().len(), MAX_PALETTE_LEN);
    }

    #[test]
    fn invalid_default_color_uses_palette() {
        let config = Config::from_toml("[brush]\ndefault_color = \"mauve\"").unwrap();
        assert!(config.brush.default_color.is_none());
        assert_eq!(config.initial_color(), CORAL);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.brush.default_size = 12.0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.brush.default_size, 12.0);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[brush\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("keybindings"));
        assert!(schema.contains("palette"));
    }
}
