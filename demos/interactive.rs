//! Interactive Example - A text field typed into with the on-screen keyboard
//!
//! Click keys with the mouse or type on the physical keyboard.
//! Tab toggles caps, Escape presses done, Ctrl+C quits.
//! Focus the field again with F2 after pressing done.
//!
//! Run with: RUST_LOG=debug cargo run --example interactive 2>keyboard.log

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use crossterm::terminal::size;
use spark_keyboard::state::input::{poll_event, route_event, Routed};
use spark_keyboard::types::{Attr, Rgba};
use spark_keyboard::{render, DiffRenderer, FrameBuffer, Keyboard, KeyboardFrame, TextField};

fn compose(
    field: &TextField,
    keyboard: &Keyboard,
    width: u16,
    height: u16,
) -> (FrameBuffer, KeyboardFrame, u16) {
    let frame = render(keyboard, width);
    let origin_y = height.saturating_sub(frame.buffer.height());

    let mut screen = FrameBuffer::new(width, height);
    let bounds = spark_keyboard::types::Rect::new(0, 0, width, origin_y);
    let dim = Rgba::rgb(0x88, 0x88, 0x88);
    screen.draw_text(0, 0, "message:", dim, Rgba::TERMINAL_DEFAULT, Attr::DIM, bounds);
    for (i, line) in field.value().split('\n').enumerate() {
        let y = 1 + i as u16;
        screen.draw_text(2, y, line, Rgba::WHITE, Rgba::TERMINAL_DEFAULT, Attr::NONE, bounds);
    }

    for (x, y, cell) in frame.buffer.iter() {
        screen.set_cell(x, origin_y + y, cell.as_char(), cell.fg, cell.bg, cell.attrs);
    }

    (screen, frame, origin_y)
}

fn main() -> spark_keyboard::Result<()> {
    env_logger::init();

    let mut keyboard = Keyboard::new();
    let field = TextField::new("message").with_keyboard(true);
    field.focus(&mut keyboard);

    let (mut width, mut height) = size()?;
    let mut renderer = DiffRenderer::stdout();
    renderer.enter_fullscreen()?;

    loop {
        let (screen, frame, origin_y) = compose(&field, &keyboard, width, height);
        renderer.render(&screen, 0)?;

        let Some(event) = poll_event(Duration::from_millis(50))? else {
            continue;
        };

        if let Event::Key(key) = &event {
            if key.code == KeyCode::F(2) && key.kind == KeyEventKind::Press {
                field.focus(&mut keyboard);
                continue;
            }
        }

        match route_event(&mut keyboard, &frame, origin_y, event)? {
            Routed::Interrupt => break,
            Routed::Resized(w, h) => {
                width = w;
                height = h;
                renderer.invalidate();
            }
            Routed::Pressed(_) | Routed::Ignored => {}
        }
    }

    renderer.exit_fullscreen()?;
    println!("{}", field.value());
    Ok(())
}
