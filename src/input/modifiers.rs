//! Keyboard modifier state.

/// Keyboard modifier state attached to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt/Option key pressed
    pub alt: bool,
    /// Meta/Command/Super key pressed
    pub meta: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub const fn new() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::new()
        }
    }

    pub const fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::new()
        }
    }

    /// True when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}
