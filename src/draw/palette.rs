//! Ordered brush palette addressed by digit keys.

use super::color::{Color, DEFAULT_PALETTE};

/// Largest palette size reachable from the digit row (keys 1 through 9).
pub const MAX_PALETTE_LEN: usize = 9;

/// Fixed, ordered list of selectable brush colors.
///
/// Entries are addressed by 1-based digit: `Digit1` selects the first color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    /// Builds a palette from the given colors.
    ///
    /// Returns `None` when the list is empty or longer than the digit row.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() || colors.len() > MAX_PALETTE_LEN {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Looks up a color by 1-based digit. `0` and digits past the end yield `None`.
    pub fn by_digit(&self, digit: u8) -> Option<Color> {
        let index = usize::from(digit).checked_sub(1)?;
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Color {
        self.colors[0]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
