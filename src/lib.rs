//! Drawing mode controller for presentation whiteboards.
//!
//! Binds a vector-drawing engine to brush state, keyboard shortcuts and the
//! per-page drawing content replicated between a presenter and viewers.
//! Configuration types are exported so external tools can share validation and
//! serialization with the main binary.

pub mod config;
pub mod controller;
pub mod draw;
pub mod input;
pub mod sync;
pub mod util;

pub use config::Config;
pub use controller::{ControllerOptions, DrawingModeController, UiFlags};
