//! Renderer Module - Keyboard to terminal
//!
//! - [`view`] paints a [`Keyboard`](crate::state::Keyboard) into a
//!   [`FrameBuffer`] and collects hit regions
//! - [`DiffRenderer`] writes frames to the terminal, changed cells only

mod buffer;
mod diff;
mod view;

pub use buffer::FrameBuffer;
pub use diff::{to_color, DiffRenderer};
pub use view::{
    key_width, render, render_with_theme, HitRegion, KeyboardFrame, KeyboardTheme,
    EXTRA_WIDE_KEY_WIDTH, KEY_GAP, KEY_HEIGHT, KEY_WIDTH, WIDE_KEY_WIDTH,
};
