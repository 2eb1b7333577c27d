//! # spark-keyboard
//!
//! On-screen virtual keyboard widget for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): the
//! keyboard's value, caps lock and visibility are signals a host can track.
//!
//! ## Architecture
//!
//! The keyboard state machine knows nothing about the terminal. Rendering is
//! a pure function of its state, and input events are mapped to key presses:
//!
//! ```text
//! crossterm Event → state::input → Keyboard → renderer::render → DiffRenderer
//!                                     ↓
//!                           oninput / onclose (host)
//! ```
//!
//! ## Modules
//!
//! - [`layout`] - Key descriptors, the default 44-key layout, configuration
//! - [`state`] - The [`Keyboard`] state machine and the input bridge
//! - [`renderer`] - Frame buffer, keyboard view, differential terminal output
//! - [`host`] - Text fields that open the keyboard on focus
//! - [`types`] - Cells, colors, rectangles
//! - [`error`] - [`KeyboardError`]

pub mod error;
pub mod host;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod types;

pub use error::{KeyboardError, Result};

pub use layout::{Key, KeyDescriptor, KeyStyle, KeyboardConfig, DEFAULT_LAYOUT, DEFAULT_LINE_BREAKS};

pub use state::{EventHandlers, KeyView, Keyboard, KeyboardEventKind, ValueHandler};

pub use renderer::{render, DiffRenderer, FrameBuffer, HitRegion, KeyboardFrame, KeyboardTheme};

pub use host::TextField;
