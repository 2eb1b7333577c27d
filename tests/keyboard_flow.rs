//! End-to-end flows: host field, keyboard, renderer and input bridge together.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use spark_keyboard::state::input::{route_event, Routed};
use spark_keyboard::{render, DiffRenderer, Key, Keyboard, KeyboardConfig, TextField};

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn click_key(keyboard: &mut Keyboard, key: Key) -> Routed {
    let frame = render(keyboard, 80);
    let index = keyboard.find_key(key).unwrap();
    let rect = frame.hit_regions[index].rect;
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    route_event(keyboard, &frame, 0, event).unwrap()
}

#[test]
fn typing_into_a_field_with_clicks() {
    let mut keyboard = Keyboard::new();
    let field = TextField::new("message").with_keyboard(true);
    field.set_value("Hi");
    field.focus(&mut keyboard);

    click_key(&mut keyboard, Key::Space);
    click_key(&mut keyboard, Key::Caps);
    click_key(&mut keyboard, Key::Char('y'));
    click_key(&mut keyboard, Key::Caps);
    click_key(&mut keyboard, Key::Char('o'));
    click_key(&mut keyboard, Key::Char('u'));
    assert_eq!(field.value(), "Hi You");

    click_key(&mut keyboard, Key::Done);
    assert_eq!(field.value(), "Hi You");
    assert!(!keyboard.is_open());

    // Closed keyboard has nothing to click
    let frame = render(&keyboard, 80);
    assert!(frame.hit_regions.is_empty());
}

#[test]
fn physical_keys_drive_callbacks() {
    let mut keyboard = Keyboard::new();
    let inputs = Rc::new(RefCell::new(Vec::new()));
    let closed = Rc::new(RefCell::new(None));

    let inputs_clone = inputs.clone();
    let closed_clone = closed.clone();
    keyboard.open(
        "",
        move |v| inputs_clone.borrow_mut().push(v.to_string()),
        move |v| *closed_clone.borrow_mut() = Some(v.to_string()),
    );

    let frame = render(&keyboard, 80);
    for code in [
        KeyCode::Char('h'),
        KeyCode::Char('i'),
        KeyCode::Enter,
        KeyCode::Char('1'),
        KeyCode::Backspace,
        KeyCode::Char('2'),
        KeyCode::Esc,
    ] {
        route_event(&mut keyboard, &frame, 0, key_event(code)).unwrap();
    }

    assert_eq!(inputs.borrow().last().map(String::as_str), Some("hi\n2"));
    assert_eq!(inputs.borrow().len(), 6);
    assert_eq!(closed.borrow().as_deref(), Some("hi\n2"));
    assert_eq!(keyboard.value(), "");
}

#[test]
fn custom_layout_end_to_end() {
    let config = KeyboardConfig::new()
        .with_layout(["y", "n", "backspace", "done"])
        .with_line_breaks(["n"]);
    let mut keyboard = Keyboard::with_config(&config).unwrap();
    keyboard.open("", |_| {}, |_| {});

    let frame = render(&keyboard, 30);
    assert_eq!(frame.hit_regions.len(), 4);

    // 'q' is not on this keyboard
    let routed = route_event(&mut keyboard, &frame, 0, key_event(KeyCode::Char('q'))).unwrap();
    assert_eq!(routed, Routed::Ignored);

    route_event(&mut keyboard, &frame, 0, key_event(KeyCode::Char('y'))).unwrap();
    assert_eq!(keyboard.value(), "y");
}

#[test]
fn frames_reach_the_terminal_writer() {
    let mut keyboard = Keyboard::new();
    keyboard.open("", |_| {}, |_| {});

    let mut renderer = DiffRenderer::new(Vec::new());
    assert!(renderer.render(&render(&keyboard, 80).buffer, 2).unwrap());

    // Caps toggle rewrites labels and the indicator only
    keyboard.press_key(Key::Caps);
    renderer.writer_mut().clear();
    assert!(renderer.render(&render(&keyboard, 80).buffer, 2).unwrap());
    let out = String::from_utf8_lossy(renderer.writer()).to_string();
    assert!(out.contains('Q'));
    assert!(out.contains('⇪'));
    assert!(!out.contains('␣'));
}
