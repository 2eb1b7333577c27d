//! Key descriptors - what each key does and how it looks.

use std::fmt;
use std::str::FromStr;

use crate::error::{KeyboardError, Result};

// =============================================================================
// Key
// =============================================================================

/// The action a key performs when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit, letter or punctuation. Letters are cased by caps lock at press time.
    Char(char),
    Backspace,
    Caps,
    Enter,
    Space,
    Done,
}

impl Key {
    /// Look up a key by its symbolic name (`"a"`, `"?"`, `"backspace"`, ...).
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "backspace" => return Ok(Key::Backspace),
            "caps" => return Ok(Key::Caps),
            "enter" => return Ok(Key::Enter),
            "space" => return Ok(Key::Space),
            "done" => return Ok(Key::Done),
            _ => {}
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(Key::Char(c)),
            _ => Err(KeyboardError::UnknownKey(name.to_string())),
        }
    }

    /// Symbolic name, the inverse of [`Key::from_name`].
    pub fn name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Caps => "caps".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Space => "space".to_string(),
            Key::Done => "done".to_string(),
        }
    }

    /// Material icon name for icon-bearing keys. Character keys have none.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Key::Char(_) => None,
            Key::Backspace => Some("backspace"),
            Key::Caps => Some("keyboard_capslock"),
            Key::Enter => Some("keyboard_return"),
            Key::Space => Some("space_bar"),
            Key::Done => Some("check_circle"),
        }
    }

    /// Terminal glyph drawn in place of the icon.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Key::Char(_) => None,
            Key::Backspace => Some('⌫'),
            Key::Caps => Some('⇪'),
            Key::Enter => Some('⏎'),
            Key::Space => Some('␣'),
            Key::Done => Some('✓'),
        }
    }

    /// Case-folded name. Letters differing only in case fold to the same
    /// name; every other key folds to itself.
    pub fn folded(&self) -> String {
        match self {
            Key::Char(c) => c.to_lowercase().collect(),
            other => other.name(),
        }
    }

    /// Same key up to letter case.
    pub fn matches(&self, other: &Key) -> bool {
        self == other || self.folded() == other.folded()
    }

    /// Default style flags for this key.
    pub fn style(&self) -> KeyStyle {
        match self {
            Key::Char(_) => KeyStyle::empty(),
            Key::Backspace | Key::Enter => KeyStyle::WIDE,
            Key::Caps => KeyStyle::WIDE | KeyStyle::ACTIVATABLE,
            Key::Done => KeyStyle::WIDE | KeyStyle::DARK,
            Key::Space => KeyStyle::EXTRA_WIDE,
        }
    }
}

impl FromStr for Key {
    type Err = KeyboardError;

    fn from_str(s: &str) -> Result<Self> {
        Key::from_name(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

// =============================================================================
// KeyStyle (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Presentation flags for a key button.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct KeyStyle: u8 {
        const WIDE = 1 << 0;
        const EXTRA_WIDE = 1 << 1;
        /// Key has an on/off indicator (caps lock).
        const ACTIVATABLE = 1 << 2;
        const DARK = 1 << 3;
    }
}

// =============================================================================
// KeyDescriptor
// =============================================================================

/// One entry of the key layout. Immutable once the keyboard is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub key: Key,
    pub style: KeyStyle,
    /// A row break follows this key.
    pub line_break: bool,
}

impl KeyDescriptor {
    pub fn new(key: Key, line_break: bool) -> Self {
        Self {
            key,
            style: key.style(),
            line_break,
        }
    }

    /// Plain-text keys show a text label and follow caps lock.
    /// Icon-bearing keys are never re-cased.
    #[inline]
    pub fn is_plain_text(&self) -> bool {
        self.key.icon().is_none()
    }

    /// Label shown before any caps toggling.
    pub fn initial_label(&self) -> String {
        match self.key {
            Key::Char(c) => c.to_lowercase().collect(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_names() {
        assert_eq!(Key::from_name("backspace").unwrap(), Key::Backspace);
        assert_eq!(Key::from_name("caps").unwrap(), Key::Caps);
        assert_eq!(Key::from_name("enter").unwrap(), Key::Enter);
        assert_eq!(Key::from_name("space").unwrap(), Key::Space);
        assert_eq!(Key::from_name("done").unwrap(), Key::Done);
    }

    #[test]
    fn test_char_names() {
        assert_eq!(Key::from_name("q").unwrap(), Key::Char('q'));
        assert_eq!(Key::from_name("?").unwrap(), Key::Char('?'));
        assert_eq!("7".parse::<Key>().unwrap(), Key::Char('7'));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(Key::from_name(""), Err(KeyboardError::UnknownKey(_))));
        assert!(matches!(Key::from_name("shift"), Err(KeyboardError::UnknownKey(_))));
        assert!(matches!(Key::from_name(" "), Err(KeyboardError::UnknownKey(_))));
        assert!(matches!(Key::from_name("\n"), Err(KeyboardError::UnknownKey(_))));
    }

    #[test]
    fn test_name_inverts_from_name() {
        for name in ["backspace", "caps", "enter", "space", "done", "x", ","] {
            assert_eq!(Key::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_styles() {
        assert_eq!(Key::Char('a').style(), KeyStyle::empty());
        assert!(Key::Caps.style().contains(KeyStyle::ACTIVATABLE));
        assert!(Key::Done.style().contains(KeyStyle::DARK));
        assert_eq!(Key::Space.style(), KeyStyle::EXTRA_WIDE);
    }

    #[test]
    fn test_folding() {
        assert!(Key::Char('Q').matches(&Key::Char('q')));
        assert!(!Key::Char('q').matches(&Key::Char('w')));
        assert!(!Key::Space.matches(&Key::Char(' ')));

        // 'İ' lowercases to two chars, so it is not the same key as plain 'i'
        assert_eq!(Key::Char('İ').folded(), "i\u{307}");
        assert!(!Key::Char('İ').matches(&Key::Char('i')));
        assert!(Key::Char('İ').matches(&Key::Char('İ')));
    }

    #[test]
    fn test_plain_text_and_labels() {
        let letter = KeyDescriptor::new(Key::Char('Q'), false);
        assert!(letter.is_plain_text());
        assert_eq!(letter.initial_label(), "q");

        let enter = KeyDescriptor::new(Key::Enter, true);
        assert!(!enter.is_plain_text());
        assert_eq!(enter.initial_label(), "");
        assert!(enter.line_break);
    }
}
