//! RGBA color type, hex conversion, and the default brush palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Colors
/// serialize as `#rrggbb` (or `#rrggbbaa` when not fully opaque) strings, which
/// is the form stored in brush state and in serialized page content.
///
/// # Examples
///
/// ```
/// use deckscriber::draw::Color;
/// let coral: Color = "#ff595e".parse().unwrap();
/// assert_eq!(coral.to_hex(), "#ff595e");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 6 or 8 hex digits")]
    BadLength(String),
    #[error("color '{0}' contains non-hex digits")]
    BadDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }

        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))
        };

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if digits.len() == 8 { channel(6)? } else { 255 };

        Ok(Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        })
    }

    /// Formats the color as a lowercase hex string.
    ///
    /// The alpha byte is only emitted when the color is not fully opaque.
    pub fn to_hex(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Default palette
// ============================================================================

/// Coral red `#ff595e`
pub const CORAL: Color = Color::from_rgb8(0xff, 0x59, 0x5e);

/// Sunflower yellow `#ffca3a`
pub const SUNFLOWER: Color = Color::from_rgb8(0xff, 0xca, 0x3a);

/// Leaf green `#8ac926`
pub const LEAF: Color = Color::from_rgb8(0x8a, 0xc9, 0x26);

/// Ocean blue `#1982c4`
pub const OCEAN: Color = Color::from_rgb8(0x19, 0x82, 0xc4);

/// Plum purple `#6a4c93`
pub const PLUM: Color = Color::from_rgb8(0x6a, 0x4c, 0x93);

/// Predefined white color `#ffffff`
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Predefined black color `#000000`
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Default brush colors in digit-key order (key 1 selects the first entry).
pub const DEFAULT_PALETTE: [Color; 7] = [CORAL, SUNFLOWER, LEAF, OCEAN, PLUM, WHITE, BLACK];
