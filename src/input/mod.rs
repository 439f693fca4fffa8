//! Keyboard input and tool selection.
//!
//! This module defines the host-independent key event types consumed by the
//! controller's shortcut dispatch, and the user-facing drawing tool enum.

pub mod events;
pub mod modifiers;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, KeyEvent};
pub use modifiers::Modifiers;
pub use tool::LogicalMode;
