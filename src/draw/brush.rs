//! Brush configuration read by the engine on every stroke.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Native drawing modes understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    Draw,
    Line,
    Rectangle,
    Ellipse,
}

/// Stylistic parameters applied to newly drawn strokes.
///
/// `arrow_end` is only meaningful with [`DrawMode::Line`] and is only set when
/// the arrow tool is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Color,
    pub size: f64,
    pub mode: DrawMode,
    pub simplify: bool,
    pub arrow_end: bool,
}

impl Brush {
    pub fn new(color: Color, size: f64) -> Self {
        Self {
            color,
            size,
            mode: DrawMode::Draw,
            simplify: true,
            arrow_end: false,
        }
    }
}
