//! Drawing mode controller.
//!
//! Owns the brush, the selected tool, the UI flags and the keyboard shortcut
//! table, and keeps them in step with a [`crate::draw::DrawingEngine`] and the
//! replicated per-page content in [`crate::sync`].

mod actions;
mod core;

pub use self::core::{ControllerOptions, DrawingModeController, UiFlags};
