//! Error types for the keyboard widget.
//!
//! The state machine itself never fails. Errors only come from the edges:
//! looking up keys by name or index, validating a layout config, and
//! writing frames to the terminal.

use thiserror::Error;

/// Errors produced at the keyboard's fallible edges.
#[derive(Debug, Error)]
pub enum KeyboardError {
    /// A symbolic key name that the layout does not contain.
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    /// A key index outside the layout.
    #[error("key index {index} out of range (layout has {len} keys)")]
    KeyIndexOutOfRange { index: usize, len: usize },

    /// A layout configuration that cannot be built.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Terminal I/O failure.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeyboardError>;
