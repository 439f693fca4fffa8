//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps key chords
//! to controller actions. Defaults reproduce the built-in shortcut table.

use crate::input::{Key, Modifiers, tool::LogicalMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Undo,
    Redo,
    /// Turn drawing off (shortcuts stay inert until re-enabled)
    DisableDrawing,
    SetMode(LogicalMode),
    ClearCanvas,
    /// Select palette color by 1-based index
    SelectColor(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingError {
    #[error("empty keybinding string")]
    Empty,
    #[error("no key specified in '{0}'")]
    MissingKey(String),
    #[error("unrecognized key '{key}' in '{binding}'")]
    UnknownKey { key: String, binding: String },
    #[error("duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key with the exact modifier set it requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z", "KeyL", "Digit3" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let mut key_part = None;

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" | "option" => alt = true,
                "meta" | "cmd" | "super" => meta = true,
                "" => {}
                _ => key_part = Some(part),
            }
        }

        let key_part = key_part.ok_or_else(|| KeybindingError::MissingKey(s.to_string()))?;
        let key = Key::from_code(key_part).binding_name().ok_or_else(|| {
            KeybindingError::UnknownKey {
                key: key_part.to_string(),
                binding: s.to_string(),
            }
        })?;

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Check if this keybinding matches the given key and modifier state exactly.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
            && self.meta == modifiers.meta
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z", "Meta+Z"]
/// mode_arrow = ["A"]
/// clear_canvas = ["C"]
/// ```
///
/// `select_color` is positional: its n-th entry selects the n-th palette color.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_disable_drawing")]
    pub disable_drawing: Vec<String>,

    #[serde(default = "default_mode_line")]
    pub mode_line: Vec<String>,

    #[serde(default = "default_mode_arrow")]
    pub mode_arrow: Vec<String>,

    #[serde(default = "default_mode_draw")]
    pub mode_draw: Vec<String>,

    #[serde(default = "default_mode_rectangle")]
    pub mode_rectangle: Vec<String>,

    #[serde(default = "default_mode_ellipse")]
    pub mode_ellipse: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_select_color")]
    pub select_color: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
            disable_drawing: default_disable_drawing(),
            mode_line: default_mode_line(),
            mode_arrow: default_mode_arrow(),
            mode_draw: default_mode_draw(),
            mode_rectangle: default_mode_rectangle(),
            mode_ellipse: default_mode_ellipse(),
            clear_canvas: default_clear_canvas(),
            select_color: default_select_color(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    ///
    /// Only the first `palette_len` entries of `select_color` are bound, so
    /// digits past the end of the palette stay unbound.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(
        &self,
        palette_len: usize,
    ) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let mut map = HashMap::new();

        let mut insert_binding =
            |binding_str: &str, action: Action| -> Result<(), KeybindingError> {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.to_string(),
                        first: existing_action,
                        second: action,
                    });
                }
                Ok(())
            };

        let groups: [(&[String], Action); 9] = [
            (self.undo.as_slice(), Action::Undo),
            (self.redo.as_slice(), Action::Redo),
            (self.disable_drawing.as_slice(), Action::DisableDrawing),
            (self.mode_line.as_slice(), Action::SetMode(LogicalMode::Line)),
            (self.mode_arrow.as_slice(), Action::SetMode(LogicalMode::Arrow)),
            (self.mode_draw.as_slice(), Action::SetMode(LogicalMode::Draw)),
            (self.mode_rectangle.as_slice(), Action::SetMode(LogicalMode::Rectangle)),
            (self.mode_ellipse.as_slice(), Action::SetMode(LogicalMode::Ellipse)),
            (self.clear_canvas.as_slice(), Action::ClearCanvas),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                insert_binding(binding_str, action)?;
            }
        }

        for (index, binding_str) in self.select_color.iter().take(palette_len).enumerate() {
            // select_color is capped by the palette, which never exceeds nine entries.
            let digit = (index + 1) as u8;
            insert_binding(binding_str, Action::SelectColor(digit))?;
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string(), "Meta+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Shift+Z".to_string(), "Meta+Shift+Z".to_string()]
}

fn default_disable_drawing() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_mode_line() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_mode_arrow() -> Vec<String> {
    vec!["A".to_string()]
}

fn default_mode_draw() -> Vec<String> {
    vec!["D".to_string()]
}

fn default_mode_rectangle() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_mode_ellipse() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_select_color() -> Vec<String> {
    (1..=9).map(|digit| format!("Digit{digit}")).collect()
}
