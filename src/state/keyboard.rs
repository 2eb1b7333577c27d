//! Keyboard Module - The virtual keyboard state machine
//!
//! Owns the text buffer, the caps lock flag, the open/closed lifecycle, the
//! per-key labels, and the two host callbacks. Nothing here touches the
//! terminal; the renderer reads this state and the input bridge drives it.
//!
//! # API
//!
//! - `open(initial, oninput, onclose)` - Show the keyboard, seed its buffer
//! - `close()` - Hide the keyboard, reset its buffer, drop the callbacks
//! - `press_key(key)` / `press(name)` / `press_index(i)` - Perform one key action
//! - `value()`, `caps_lock()`, `is_open()`, `keys()` - Read state
//!
//! # Example
//!
//! ```ignore
//! use spark_keyboard::state::Keyboard;
//! use spark_keyboard::layout::Key;
//!
//! let mut keyboard = Keyboard::new();
//! keyboard.open(
//!     "hello",
//!     |value| println!("value changed: {}", value),
//!     |value| println!("done: {}", value),
//! );
//!
//! keyboard.press_key(Key::Char('!'));   // prints "value changed: hello!"
//! keyboard.press_key(Key::Done);        // prints "done: hello!"
//! ```

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::error::{KeyboardError, Result};
use crate::layout::{default_keys, Key, KeyDescriptor, KeyStyle, KeyboardConfig};

// =============================================================================
// TYPES
// =============================================================================

/// Host callback receiving the keyboard's current value.
pub type ValueHandler = Rc<dyn Fn(&str)>;

/// The two notifications a keyboard sends its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardEventKind {
    /// The value changed.
    Input,
    /// The user pressed `done`.
    Close,
}

impl KeyboardEventKind {
    pub fn handler_name(&self) -> &'static str {
        match self {
            KeyboardEventKind::Input => "oninput",
            KeyboardEventKind::Close => "onclose",
        }
    }
}

/// The host callbacks installed by [`Keyboard::open`].
#[derive(Clone, Default)]
pub struct EventHandlers {
    pub oninput: Option<ValueHandler>,
    pub onclose: Option<ValueHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_input<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.oninput = Some(Rc::new(handler));
        self
    }

    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.onclose = Some(Rc::new(handler));
        self
    }

    fn get(&self, kind: KeyboardEventKind) -> Option<&ValueHandler> {
        match kind {
            KeyboardEventKind::Input => self.oninput.as_ref(),
            KeyboardEventKind::Close => self.onclose.as_ref(),
        }
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("oninput", &self.oninput.is_some())
            .field("onclose", &self.onclose.is_some())
            .finish()
    }
}

/// A key as currently displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyView {
    pub descriptor: KeyDescriptor,
    /// Text label. Empty for icon-bearing keys.
    pub label: String,
    /// Indicator state of an activatable key (caps lock light).
    pub active: bool,
}

impl KeyView {
    fn new(descriptor: KeyDescriptor, caps_lock: bool) -> Self {
        let mut view = Self {
            descriptor,
            label: descriptor.initial_label(),
            active: false,
        };
        view.apply_caps(caps_lock);
        view
    }

    fn apply_caps(&mut self, caps_lock: bool) {
        if self.descriptor.is_plain_text() {
            if let Key::Char(c) = self.descriptor.key {
                self.label = case_char(c, caps_lock);
            }
        }
        if self.descriptor.style.contains(KeyStyle::ACTIVATABLE) {
            self.active = caps_lock;
        }
    }
}

fn case_char(c: char, upper: bool) -> String {
    if upper {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    }
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// An on-screen keyboard instance.
///
/// Each instance owns its own state; any number can coexist. All mutation
/// happens through `&mut self` on the UI thread.
pub struct Keyboard {
    keys: Vec<KeyView>,
    value: Signal<String>,
    caps_lock: Signal<bool>,
    visible: Signal<bool>,
    handlers: EventHandlers,
}

impl Keyboard {
    /// Create a closed keyboard with the default 44-key layout.
    pub fn new() -> Self {
        Self::from_descriptors(default_keys(), false)
    }

    /// Create a closed keyboard from a validated config.
    pub fn with_config(config: &KeyboardConfig) -> Result<Self> {
        let keys = config.build()?;
        Ok(Self::from_descriptors(keys, config.caps_lock))
    }

    fn from_descriptors(descriptors: Vec<KeyDescriptor>, caps_lock: bool) -> Self {
        Self {
            keys: descriptors
                .into_iter()
                .map(|d| KeyView::new(d, caps_lock))
                .collect(),
            value: signal(String::new()),
            caps_lock: signal(caps_lock),
            visible: signal(false),
            handlers: EventHandlers::default(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the keyboard, seed its buffer and install both callbacks.
    pub fn open<I, C>(&mut self, initial_value: &str, oninput: I, onclose: C)
    where
        I: Fn(&str) + 'static,
        C: Fn(&str) + 'static,
    {
        self.open_with_handlers(
            Some(initial_value),
            EventHandlers::new().on_input(oninput).on_close(onclose),
        );
    }

    /// Show the keyboard with an explicit handler set.
    ///
    /// A missing initial value seeds an empty buffer. The handler set
    /// replaces whatever was installed before.
    pub fn open_with_handlers(&mut self, initial_value: Option<&str>, handlers: EventHandlers) {
        let initial = initial_value.unwrap_or_default().to_string();
        log::debug!("keyboard open (initial length {}, {:?})", initial.len(), handlers);

        self.value.set(initial);
        self.handlers = handlers;
        self.visible.set(true);
    }

    /// Hide the keyboard, reset its buffer and drop the callbacks.
    ///
    /// Safe to call while already closed.
    pub fn close(&mut self) {
        log::debug!("keyboard close");

        self.value.set(String::new());
        self.handlers = EventHandlers::default();
        self.visible.set(false);
    }

    // =========================================================================
    // Key actions
    // =========================================================================

    /// Perform the action of one key.
    pub fn press_key(&mut self, key: Key) {
        log::trace!("key press: {}", key);

        match key {
            Key::Char(c) => {
                let cased = case_char(c, self.caps_lock.get());
                self.update_value(|value| value.push_str(&cased));
                self.trigger_event(KeyboardEventKind::Input);
            }
            Key::Backspace => {
                self.update_value(|value| {
                    value.pop();
                });
                self.trigger_event(KeyboardEventKind::Input);
            }
            Key::Enter => {
                self.update_value(|value| value.push('\n'));
                self.trigger_event(KeyboardEventKind::Input);
            }
            Key::Space => {
                self.update_value(|value| value.push(' '));
                self.trigger_event(KeyboardEventKind::Input);
            }
            Key::Caps => self.toggle_caps_lock(),
            Key::Done => {
                // close() drops the handlers, so keep what onclose needs first.
                let final_value = self.value.get();
                let onclose = self.handlers.onclose.clone();
                self.close();
                log::trace!("dispatch onclose");
                if let Some(handler) = onclose {
                    handler(&final_value);
                }
            }
        }
    }

    /// Press a key by symbolic name. The key must be part of this keyboard's layout.
    pub fn press(&mut self, name: &str) -> Result<()> {
        let key = Key::from_name(name)?;
        let index = self
            .find_key(key)
            .ok_or_else(|| KeyboardError::UnknownKey(name.to_string()))?;
        self.press_index(index)
    }

    /// Press the key at a layout position.
    pub fn press_index(&mut self, index: usize) -> Result<()> {
        let key = self
            .keys
            .get(index)
            .map(|view| view.descriptor.key)
            .ok_or(KeyboardError::KeyIndexOutOfRange {
                index,
                len: self.keys.len(),
            })?;
        self.press_key(key);
        Ok(())
    }

    /// Position of a key in the layout. Letters match regardless of case.
    pub fn find_key(&self, key: Key) -> Option<usize> {
        self.keys.iter().position(|view| view.descriptor.key.matches(&key))
    }

    fn toggle_caps_lock(&mut self) {
        let caps_lock = !self.caps_lock.get();
        self.caps_lock.set(caps_lock);
        log::debug!("caps lock {}", if caps_lock { "on" } else { "off" });

        for view in &mut self.keys {
            view.apply_caps(caps_lock);
        }
    }

    fn update_value(&mut self, f: impl FnOnce(&mut String)) {
        let mut value = self.value.get();
        f(&mut value);
        self.value.set(value);
    }

    /// Invoke the installed handler for `kind` with the current value.
    /// Missing handlers are a silent no-op.
    fn trigger_event(&self, kind: KeyboardEventKind) {
        if let Some(handler) = self.handlers.get(kind) {
            log::trace!("dispatch {}", kind.handler_name());
            let value = self.value.get();
            handler(&value);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current text buffer.
    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock.get()
    }

    pub fn is_open(&self) -> bool {
        self.visible.get()
    }

    /// Keys in layout order, with their current labels.
    pub fn keys(&self) -> &[KeyView] {
        &self.keys
    }

    /// Whether a handler for `kind` is installed.
    pub fn has_handler(&self, kind: KeyboardEventKind) -> bool {
        self.handlers.get(kind).is_some()
    }

    /// Value signal for reactive tracking.
    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    /// Caps lock signal for reactive tracking.
    pub fn caps_lock_signal(&self) -> Signal<bool> {
        self.caps_lock.clone()
    }

    /// Visibility signal for reactive tracking.
    pub fn visible_signal(&self) -> Signal<bool> {
        self.visible.clone()
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyboard")
            .field("value", &self.value.get())
            .field("caps_lock", &self.caps_lock.get())
            .field("visible", &self.visible.get())
            .field("keys", &self.keys.len())
            .field("handlers", &self.handlers)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
