//! Input Module - Terminal events to key presses
//!
//! Bridges crossterm's event system with the keyboard state machine.
//! Physical keys and mouse clicks both end up as `press_index` calls.
//!
//! # Mapping
//!
//! - Printable characters present in the layout press that key
//! - Space / Backspace / Enter press the matching special key
//! - Tab toggles caps, Escape presses done
//! - Left click presses the key under the cursor
//! - Ctrl+C is reported as an interrupt and never reaches the keyboard
//!
//! # Example
//!
//! ```ignore
//! use spark_keyboard::state::input::{poll_event, route_event, Routed};
//! use std::time::Duration;
//!
//! loop {
//!     if let Some(event) = poll_event(Duration::from_millis(16))? {
//!         match route_event(&mut keyboard, &frame, 0, event)? {
//!             Routed::Interrupt => break,
//!             _ => {}
//!         }
//!     }
//! }
//! ```

use std::io;
use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};

use super::keyboard::Keyboard;
use crate::error::Result;
use crate::layout::Key;
use crate::renderer::KeyboardFrame;

/// What happened to a routed terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// The key at this layout index was pressed.
    Pressed(usize),
    /// Terminal resized to (width, height).
    Resized(u16, u16),
    /// Ctrl+C.
    Interrupt,
    /// Not meaningful to the keyboard.
    Ignored,
}

// =============================================================================
// KEY EVENT MAPPING
// =============================================================================

/// Map a crossterm key event to a layout index on `keyboard`.
///
/// Only press events map; repeats and releases are ignored. Keys that the
/// layout does not contain map to None, as does everything while the
/// keyboard is closed.
pub fn key_index_for_event(keyboard: &Keyboard, event: &CrosstermKeyEvent) -> Option<usize> {
    if !keyboard.is_open() || event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Caps,
        KeyCode::Esc => Key::Done,
        _ => return None,
    };
    keyboard.find_key(key)
}

fn is_interrupt(event: &CrosstermKeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c'))
}

/// Map a left click to a layout index. `origin_y` is the frame's top row.
pub fn key_index_for_click(
    frame: &KeyboardFrame,
    origin_y: u16,
    event: &CrosstermMouseEvent,
) -> Option<usize> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let y = event.row.checked_sub(origin_y)?;
            frame.hit_test(event.column, y)
        }
        _ => None,
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route a terminal event to the keyboard.
///
/// `frame` is the last rendered frame (for click hit-testing) and `origin_y`
/// the row it was drawn at.
pub fn route_event(
    keyboard: &mut Keyboard,
    frame: &KeyboardFrame,
    origin_y: u16,
    event: CrosstermEvent,
) -> Result<Routed> {
    let index = match event {
        CrosstermEvent::Key(key) if is_interrupt(&key) => return Ok(Routed::Interrupt),
        CrosstermEvent::Key(key) => key_index_for_event(keyboard, &key),
        CrosstermEvent::Mouse(mouse) => key_index_for_click(frame, origin_y, &mouse),
        CrosstermEvent::Resize(w, h) => return Ok(Routed::Resized(w, h)),
        _ => None,
    };

    match index {
        Some(index) => {
            keyboard.press_index(index)?;
            Ok(Routed::Pressed(index))
        }
        None => Ok(Routed::Ignored),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout. Returns None if nothing arrived.
pub fn poll_event(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================
