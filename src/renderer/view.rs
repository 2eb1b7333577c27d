//! Keyboard view - paints a keyboard into a FrameBuffer.
//!
//! Rendering is a pure function of keyboard state: the same state always
//! produces the same frame. Hit regions are collected as data alongside the
//! buffer so mouse clicks can be mapped back to key indices.

use crate::layout::{rows, KeyDescriptor, KeyStyle};
use crate::state::{KeyView, Keyboard};
use crate::types::{Attr, Rect, Rgba};

use super::buffer::FrameBuffer;

/// Width of a regular key in cells.
pub const KEY_WIDTH: u16 = 5;
/// Width of a WIDE key.
pub const WIDE_KEY_WIDTH: u16 = 9;
/// Width of an EXTRA_WIDE key (space bar).
pub const EXTRA_WIDE_KEY_WIDTH: u16 = 33;
/// Height of every key; the label sits on the middle line.
pub const KEY_HEIGHT: u16 = 3;
/// Horizontal gap between keys.
pub const KEY_GAP: u16 = 1;

// =============================================================================
// Theme
// =============================================================================

/// Colors used to paint keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardTheme {
    pub background: Rgba,
    pub key_bg: Rgba,
    pub key_fg: Rgba,
    pub dark_bg: Rgba,
    pub dark_fg: Rgba,
    /// Foreground of an activatable key whose indicator is on.
    pub active_fg: Rgba,
}

impl Default for KeyboardTheme {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0x26, 0x26, 0x26),
            key_bg: Rgba::rgb(0x44, 0x44, 0x44),
            key_fg: Rgba::WHITE,
            dark_bg: Rgba::rgb(0x0a, 0x0a, 0x0a),
            dark_fg: Rgba::WHITE,
            active_fg: Rgba::rgb(0x08, 0xff, 0x00),
        }
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Clickable area of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub key_index: usize,
}

/// Result of rendering a keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardFrame {
    pub buffer: FrameBuffer,
    /// One region per key, in layout order.
    pub hit_regions: Vec<HitRegion>,
}

impl KeyboardFrame {
    /// Frame of a hidden keyboard: zero rows, nothing clickable.
    pub fn empty(width: u16) -> Self {
        Self {
            buffer: FrameBuffer::new(width, 0),
            hit_regions: Vec::new(),
        }
    }

    /// Key index under a cell, relative to the frame origin.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.hit_regions
            .iter()
            .find(|region| region.rect.contains(x, y))
            .map(|region| region.key_index)
    }
}

/// Cell width of a key.
pub fn key_width(desc: &KeyDescriptor) -> u16 {
    if desc.style.contains(KeyStyle::EXTRA_WIDE) {
        EXTRA_WIDE_KEY_WIDTH
    } else if desc.style.contains(KeyStyle::WIDE) {
        WIDE_KEY_WIDTH
    } else {
        KEY_WIDTH
    }
}

/// Largest cell coordinate a key may reach. Keys and rows past it are not placed.
const MAX_COORD: u64 = u16::MAX as u64;

fn row_width(row: &[KeyDescriptor]) -> u64 {
    let keys: u64 = row.iter().map(|desc| key_width(desc) as u64).sum();
    keys + KEY_GAP as u64 * row.len().saturating_sub(1) as u64
}

/// Render with the default theme.
pub fn render(keyboard: &Keyboard, width: u16) -> KeyboardFrame {
    render_with_theme(keyboard, width, &KeyboardTheme::default())
}

/// Render the keyboard into a frame `width` cells wide. Rows are centered.
pub fn render_with_theme(
    keyboard: &Keyboard,
    width: u16,
    theme: &KeyboardTheme,
) -> KeyboardFrame {
    if !keyboard.is_open() {
        return KeyboardFrame::empty(width);
    }

    let views = keyboard.keys();
    let descriptors: Vec<KeyDescriptor> = views.iter().map(|v| v.descriptor).collect();
    let rows = rows(&descriptors);

    let placed_rows = rows.len().min((MAX_COORD / KEY_HEIGHT as u64) as usize);
    let height = (placed_rows as u64 * KEY_HEIGHT as u64) as u16;
    let mut buffer = FrameBuffer::new(width, height);
    buffer.fill_rect(Rect::new(0, 0, width, height), theme.background);

    let mut hit_regions = Vec::with_capacity(views.len());
    for (row_index, (start, row)) in rows.iter().take(placed_rows).enumerate() {
        let y = (row_index as u64 * KEY_HEIGHT as u64) as u16;
        let mut x = (width as u64).saturating_sub(row_width(row)) / 2;

        for (offset, desc) in row.iter().enumerate() {
            let key_w = key_width(desc);
            if x + key_w as u64 > MAX_COORD {
                break;
            }
            let rect = Rect::new(x as u16, y, key_w, KEY_HEIGHT);
            paint_key(&mut buffer, rect, &views[start + offset], theme);
            hit_regions.push(HitRegion {
                rect,
                key_index: start + offset,
            });
            x += key_w as u64 + KEY_GAP as u64;
        }
    }

    KeyboardFrame { buffer, hit_regions }
}

fn paint_key(buffer: &mut FrameBuffer, rect: Rect, view: &KeyView, theme: &KeyboardTheme) {
    let desc = &view.descriptor;
    let (bg, mut fg) = if desc.style.contains(KeyStyle::DARK) {
        (theme.dark_bg, theme.dark_fg)
    } else {
        (theme.key_bg, theme.key_fg)
    };
    let mut attrs = Attr::NONE;
    if view.active {
        fg = theme.active_fg;
        attrs |= Attr::BOLD;
    }

    buffer.fill_rect(rect, bg);

    let label = match desc.key.glyph() {
        Some(glyph) => glyph.to_string(),
        None => view.label.clone(),
    };
    let label_width = label.chars().count() as u16;
    let label_x = rect.x.saturating_add(rect.width.saturating_sub(label_width) / 2);
    let label_y = rect.y.saturating_add(KEY_HEIGHT / 2);
    buffer.draw_text(label_x, label_y, &label, fg, bg, attrs, rect);
}
