//! Differential terminal renderer.
//!
//! Compares the current frame to the previous one and only writes cells that
//! changed. Output goes through crossterm commands queued on one writer and
//! flushed once per frame.
//!
//! # Algorithm
//!
//! 1. Begin a synchronized update
//! 2. If the frame size or origin changed: clear the screen, draw everything
//! 3. Otherwise: draw only cells that differ from the previous frame
//! 4. End the synchronized update and flush
//! 5. Keep the frame for the next comparison

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, BeginSynchronizedUpdate, Clear, ClearType,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell, Rgba};

/// Convert a cell color to a crossterm color.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

/// Differential renderer writing to any `Write` sink (stdout by default).
pub struct DiffRenderer<W: Write = Stdout> {
    out: W,
    previous: Option<(u16, FrameBuffer)>,
    // Last emitted style, to skip redundant escape sequences within a frame.
    style: Option<(Rgba, Rgba, Attr)>,
    in_fullscreen: bool,
}

impl DiffRenderer<Stdout> {
    /// Renderer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
            style: None,
            in_fullscreen: false,
        }
    }

    /// Switch to the alternate screen with raw mode and mouse capture.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        self.in_fullscreen = true;
        self.previous = None;
        Ok(())
    }

    /// Restore the terminal. No-op when not in fullscreen.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        if !self.in_fullscreen {
            return Ok(());
        }
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        disable_raw_mode()?;
        self.in_fullscreen = false;
        Ok(())
    }

    /// Render a frame with its top-left corner at row `origin_y`.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer, origin_y: u16) -> io::Result<bool> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        self.style = None;

        let full = match &self.previous {
            Some((prev_origin, prev)) => {
                *prev_origin != origin_y
                    || prev.width() != buffer.width()
                    || prev.height() != buffer.height()
            }
            None => true,
        };

        if full {
            queue!(self.out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        }

        let mut has_changes = false;
        for (x, y, cell) in buffer.iter() {
            let changed = full
                || match &self.previous {
                    Some((_, prev)) => prev.get(x, y) != Some(cell),
                    None => true,
                };
            if changed {
                has_changes = true;
                self.write_cell(x, origin_y.saturating_add(y), cell)?;
            }
        }

        queue!(self.out, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        self.out.flush()?;

        self.previous = Some((origin_y, buffer.clone()));
        Ok(has_changes)
    }

    /// Force a full redraw on the next render (after resize).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    fn write_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;

        let style = (cell.fg, cell.bg, cell.attrs);
        if self.style != Some(style) {
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(to_color(cell.fg)),
                SetBackgroundColor(to_color(cell.bg))
            )?;
            for (flag, attribute) in [
                (Attr::BOLD, Attribute::Bold),
                (Attr::DIM, Attribute::Dim),
                (Attr::UNDERLINE, Attribute::Underlined),
                (Attr::INVERSE, Attribute::Reverse),
            ] {
                if cell.attrs.contains(flag) {
                    queue!(self.out, SetAttribute(attribute))?;
                }
            }
            self.style = Some(style);
        }

        queue!(self.out, Print(cell.as_char()))
    }

    /// Access the underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Mutable access to the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for DiffRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit_fullscreen();
    }
}
