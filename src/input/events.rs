//! Keyboard event types.

use super::modifiers::Modifiers;

/// Physical key identification.
///
/// Hosts map their native key codes to these values. Codes follow the
/// layout-independent `KeyboardEvent.code` naming (`KeyZ`, `Digit3`, `Escape`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Letter key, stored uppercase (`KeyA` .. `KeyZ`)
    Letter(char),
    /// Digit row key (`Digit0` .. `Digit9`)
    Digit(u8),
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a key code (`KeyZ`, `Digit3`, `Escape`) or a bare key name
    /// (`z`, `3`) to a [`Key`].
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("escape") || code.eq_ignore_ascii_case("esc") {
            return Key::Escape;
        }

        let bare = code
            .strip_prefix("Key")
            .or_else(|| code.strip_prefix("Digit"))
            .unwrap_or(code);

        let mut chars = bare.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Key::Letter(c.to_ascii_uppercase()),
            (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
            _ => Key::Unknown,
        }
    }

    /// Name used to match against configured keybindings (`Z`, `3`, `Escape`).
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Letter(c) => Some(c.to_string()),
            Key::Digit(d) => Some(d.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Unknown => None,
        }
    }
}

/// A key-down event delivered by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Event target accepts text input (text field, editable element).
    pub target_editable: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            target_editable: false,
        }
    }

    /// Event without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::new())
    }

    /// Parses a chord such as `Ctrl+Shift+KeyZ`, `Digit3` or `Escape`.
    pub fn parse_chord(chord: &str) -> Self {
        let mut modifiers = Modifiers::new();
        let mut key = Key::Unknown;
        for part in chord.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                _ => key = Key::from_code(part),
            }
        }
        Self::new(key, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_codes() {
        assert_eq!(Key::from_code("KeyZ"), Key::Letter('Z'));
        assert_eq!(Key::from_code("Digit3"), Key::Digit(3));
        assert_eq!(Key::from_code("Escape"), Key::Escape);
        assert_eq!(Key::from_code("ArrowLeft"), Key::Unknown);
    }

    #[test]
    fn maps_bare_names() {
        assert_eq!(Key::from_code("l"), Key::Letter('L'));
        assert_eq!(Key::from_code("0"), Key::Digit(0));
    }

    #[test]
    fn parses_chords() {
        let event = KeyEvent::parse_chord("Ctrl+Shift+KeyZ");
        assert_eq!(event.key, Key::Letter('Z'));
        assert!(event.modifiers.ctrl && event.modifiers.shift);
        assert!(!event.modifiers.alt && !event.modifiers.meta);

        let event = KeyEvent::parse_chord("Meta+z");
        assert!(event.modifiers.meta);
        assert_eq!(event.key, Key::Letter('Z'));
    }
}
