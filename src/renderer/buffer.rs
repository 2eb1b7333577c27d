//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. Flat storage, row-major: `index = y * width + x`.

use crate::types::{Attr, Cell, Rect, Rgba};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            (x, y, cell)
        })
    }

    /// Set a single cell. Returns false when out of bounds.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = Cell {
            char: char as u32,
            fg,
            bg,
            attrs,
        };
        true
    }

    /// Fill a rectangle with a background color, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba) {
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                self.set_cell(x, y, ' ', Rgba::TERMINAL_DEFAULT, bg, Attr::NONE);
            }
        }
    }

    /// Draw text starting at (x, y), clipped to `clip`. One cell per char.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Rect,
    ) {
        for (offset, ch) in text.chars().enumerate() {
            let cx = x as usize + offset;
            if cx > u16::MAX as usize {
                break;
            }
            let cx = cx as u16;
            if clip.contains(cx, y) {
                self.set_cell(cx, y, ch, fg, bg, attrs);
            }
        }
    }

    /// Row `y` as a string (trailing spaces kept).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(Cell::as_char)
            .collect()
    }
}
