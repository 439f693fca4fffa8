//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color::DEFAULT_PALETTE;
use crate::input::LogicalMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when the controller is created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Initial brush color. When unset, the first palette color is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<ColorSpec>,

    /// Initial stroke width in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Simplify freehand strokes when they are committed
    #[serde(default = "default_simplify")]
    pub simplify: bool,

    /// Initial drawing tool (draw, line, rectangle, ellipse, arrow)
    #[serde(default)]
    pub default_mode: LogicalMode,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            default_size: default_size(),
            simplify: default_simplify(),
            default_mode: LogicalMode::default(),
        }
    }
}

/// Digit-addressable brush colors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Colors selected by keys 1-9, in order (1 to 9 entries)
    #[serde(default = "default_palette_colors")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
        }
    }
}

/// Keyboard shortcut behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShortcutsConfig {
    /// Dispatch keyboard shortcuts at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Leave key events alone when they target an editable element
    #[serde(default)]
    pub ignore_editable_targets: bool,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_editable_targets: false,
        }
    }
}

/// Engine notification handling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EngineConfig {
    /// Recompute undo/redo/clear availability on engine notifications
    #[serde(default = "default_true")]
    pub track_state: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { track_state: true }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_size() -> f64 {
    4.0
}

fn default_simplify() -> bool {
    true
}

fn default_true() -> bool {
    true
}

pub(super) fn default_palette_colors() -> Vec<ColorSpec> {
    DEFAULT_PALETTE.iter().copied().map(ColorSpec::from).collect()
}
