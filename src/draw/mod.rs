//! Drawing primitives and the engine seam.
//!
//! This module defines the core drawing types used by the controller:
//! - [`Color`] and [`Palette`]: brush colors and the digit-addressable palette
//! - [`Brush`] and [`DrawMode`]: stroke parameters read by the engine
//! - [`Shape`]: committed strokes
//! - [`DrawingEngine`]: the engine interface, with [`Sketchpad`] as an in-memory implementation

pub mod brush;
pub mod color;
pub mod engine;
pub mod palette;
pub mod shape;
pub mod sketchpad;

// Re-export commonly used types at module level
pub use brush::{Brush, DrawMode};
pub use color::{Color, ColorParseError};
pub use engine::{DrawingEngine, EngineError, EngineEvent};
pub use palette::Palette;
pub use shape::{Point, Shape};
pub use sketchpad::Sketchpad;
