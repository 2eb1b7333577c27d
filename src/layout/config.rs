//! Keyboard configuration.
//!
//! A [`KeyboardConfig`] names keys symbolically. [`KeyboardConfig::build`]
//! validates it and produces the descriptor list the keyboard renders.

use std::collections::HashSet;

use super::keys::{Key, KeyDescriptor};
use super::{DEFAULT_LAYOUT, DEFAULT_LINE_BREAKS};
use crate::error::{KeyboardError, Result};

/// Configuration for building a keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Ordered symbolic key names.
    pub layout: Vec<String>,
    /// Keys that end a row.
    pub line_breaks: Vec<String>,
    /// Start with caps lock on.
    pub caps_lock: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.iter().map(|k| k.to_string()).collect(),
            line_breaks: DEFAULT_LINE_BREAKS.iter().map(|k| k.to_string()).collect(),
            caps_lock: false,
        }
    }
}

impl KeyboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the key layout.
    pub fn with_layout<I, S>(mut self, layout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout = layout.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the row break keys.
    pub fn with_line_breaks<I, S>(mut self, line_breaks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_breaks = line_breaks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_caps_lock(mut self, caps_lock: bool) -> Self {
        self.caps_lock = caps_lock;
        self
    }

    /// Validate the config and build the key descriptors.
    pub fn build(&self) -> Result<Vec<KeyDescriptor>> {
        if self.layout.is_empty() {
            return Err(invalid("layout has no keys".to_string()));
        }

        let mut seen = HashSet::new();
        let mut keys = Vec::with_capacity(self.layout.len());
        for name in &self.layout {
            let key = Key::from_name(name)?;
            if !seen.insert(key.folded()) {
                return Err(invalid(format!("duplicate key {:?}", name)));
            }
            keys.push(key);
        }

        let mut breaks = HashSet::new();
        for name in &self.line_breaks {
            let key = Key::from_name(name)?.folded();
            if !seen.contains(&key) {
                return Err(invalid(format!(
                    "line break after {:?}, which is not in the layout",
                    name
                )));
            }
            breaks.insert(key);
        }

        Ok(keys
            .into_iter()
            .map(|key| KeyDescriptor::new(key, breaks.contains(&key.folded())))
            .collect())
    }
}

fn invalid(reason: String) -> KeyboardError {
    log::warn!("rejecting keyboard config: {}", reason);
    KeyboardError::InvalidLayout(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_44_keys() {
        let keys = KeyboardConfig::default().build().unwrap();
        assert_eq!(keys.len(), 44);
        assert_eq!(keys.iter().filter(|k| k.line_break).count(), 4);
    }

    #[test]
    fn test_custom_layout() {
        let keys = KeyboardConfig::new()
            .with_layout(["a", "b", "backspace", "done"])
            .with_line_breaks(["b"])
            .build()
            .unwrap();

        assert_eq!(keys.len(), 4);
        assert!(keys[1].line_break);
        assert!(!keys[3].line_break);
        assert_eq!(keys[2].key, Key::Backspace);
    }

    #[test]
    fn test_empty_layout_rejected() {
        let result = KeyboardConfig::new()
            .with_layout(Vec::<String>::new())
            .with_line_breaks(Vec::<String>::new())
            .build();
        assert!(matches!(result, Err(KeyboardError::InvalidLayout(_))));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = KeyboardConfig::new()
            .with_layout(["a", "A"])
            .with_line_breaks(Vec::<String>::new())
            .build();
        assert!(matches!(result, Err(KeyboardError::InvalidLayout(_))));
    }

    #[test]
    fn test_multi_char_lowercase_is_its_own_key() {
        // 'İ' lowercases to "i\u{307}", which is not 'i'
        let keys = KeyboardConfig::new()
            .with_layout(["i", "İ"])
            .with_line_breaks(["İ"])
            .build()
            .unwrap();
        assert!(!keys[0].line_break);
        assert!(keys[1].line_break);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = KeyboardConfig::new().with_layout(["a", "shift"]).build();
        assert!(matches!(result, Err(KeyboardError::UnknownKey(_))));
    }

    #[test]
    fn test_dangling_line_break_rejected() {
        let result = KeyboardConfig::new()
            .with_layout(["a", "b"])
            .with_line_breaks(["c"])
            .build();
        assert!(matches!(result, Err(KeyboardError::InvalidLayout(_))));
    }
}
