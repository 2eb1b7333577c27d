//! Layout Module - The key layout
//!
//! The keyboard renders a fixed, ordered list of keys split into rows.
//! The default layout has 44 keys in five rows:
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9 0 backspace
//! q w e r t y u i o p
//! caps a s d f g h j k l enter
//! done z x c v b n m , . ?
//! space
//! ```

mod config;
mod keys;

pub use config::KeyboardConfig;
pub use keys::{Key, KeyDescriptor, KeyStyle};

/// Symbolic names of the default layout, in render order.
pub const DEFAULT_LAYOUT: [&str; 44] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "backspace",
    "q", "w", "e", "r", "t", "y", "u", "i", "o", "p",
    "caps", "a", "s", "d", "f", "g", "h", "j", "k", "l", "enter",
    "done", "z", "x", "c", "v", "b", "n", "m", ",", ".", "?",
    "space",
];

/// Keys followed by a row break in the default layout.
pub const DEFAULT_LINE_BREAKS: [&str; 4] = ["backspace", "p", "enter", "?"];

/// Build the default layout's descriptors.
pub fn default_keys() -> Vec<KeyDescriptor> {
    DEFAULT_LAYOUT
        .iter()
        .filter_map(|name| {
            let key = Key::from_name(name).ok()?;
            Some(KeyDescriptor::new(key, DEFAULT_LINE_BREAKS.contains(name)))
        })
        .collect()
}

/// Split keys into rows as `(start_index, keys)` pairs.
///
/// A row ends after every key with `line_break` set; trailing keys form the
/// last row.
pub fn rows(keys: &[KeyDescriptor]) -> Vec<(usize, &[KeyDescriptor])> {
    let mut rows = Vec::new();
    let mut start = 0;
    for (i, desc) in keys.iter().enumerate() {
        if desc.line_break {
            rows.push((start, &keys[start..=i]));
            start = i + 1;
        }
    }
    if start < keys.len() {
        rows.push((start, &keys[start..]));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_match_config() {
        assert_eq!(default_keys(), KeyboardConfig::default().build().unwrap());
    }

    #[test]
    fn test_default_rows() {
        let keys = default_keys();
        let rows = rows(&keys);
        let sizes: Vec<usize> = rows.iter().map(|(_, r)| r.len()).collect();
        assert_eq!(sizes, vec![11, 10, 11, 11, 1]);

        assert_eq!(rows[1].0, 11);
        assert_eq!(rows[4].1[0].key, Key::Space);
    }

    #[test]
    fn test_rows_trailing_break() {
        let keys = vec![
            KeyDescriptor::new(Key::Char('a'), false),
            KeyDescriptor::new(Key::Char('b'), true),
        ];
        let rows = rows(&keys);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.len(), 2);
    }
}
