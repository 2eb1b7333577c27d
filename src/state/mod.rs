//! State Module - Runtime state of a keyboard
//!
//! - **Keyboard** - Text buffer, caps lock, lifecycle, host callbacks
//! - **Input** - crossterm events to key presses

pub mod input;
mod keyboard;

pub use keyboard::*;
