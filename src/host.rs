//! Host binding - text fields that open the keyboard on focus.
//!
//! A [`TextField`] tagged with `use_keyboard` opens the keyboard when focused,
//! seeded with the field's value. Every edit is written back into the field's
//! value signal, so anything tracking that signal sees the keyboard's text.
//!
//! ```ignore
//! use spark_keyboard::host::TextField;
//! use spark_keyboard::state::Keyboard;
//!
//! let mut keyboard = Keyboard::new();
//! let field = TextField::new("notes").with_keyboard(true);
//!
//! field.focus(&mut keyboard);     // keyboard opens with the field's text
//! keyboard.press("a")?;           // field.value() == "a"
//! ```

use spark_signals::{signal, Signal};

use crate::state::{EventHandlers, Keyboard};

/// A host input element.
#[derive(Clone)]
pub struct TextField {
    name: String,
    value: Signal<String>,
    use_keyboard: bool,
}

impl TextField {
    /// An empty field that does not use the keyboard.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: signal(String::new()),
            use_keyboard: false,
        }
    }

    /// Bind to an existing value signal.
    pub fn with_value(mut self, value: Signal<String>) -> Self {
        self.value = value;
        self
    }

    /// Tag the field for keyboard input.
    pub fn with_keyboard(mut self, use_keyboard: bool) -> Self {
        self.use_keyboard = use_keyboard;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set(value.into());
    }

    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    pub fn uses_keyboard(&self) -> bool {
        self.use_keyboard
    }

    /// Focus the field. Tagged fields open `keyboard` bound to this field.
    ///
    /// Returns whether the keyboard was opened.
    pub fn focus(&self, keyboard: &mut Keyboard) -> bool {
        if !self.use_keyboard {
            return false;
        }

        log::debug!("field {:?} focused, opening keyboard", self.name);

        let on_input = self.value.clone();
        let on_close = self.value.clone();
        keyboard.open_with_handlers(
            Some(&self.value.get()),
            EventHandlers::new()
                .on_input(move |value| {
                    on_input.set(value.to_string());
                })
                .on_close(move |value| {
                    on_close.set(value.to_string());
                }),
        );
        true
    }
}

/// Focus the first field in `fields` named `name`.
///
/// Returns whether a keyboard opened.
pub fn focus_field(fields: &[TextField], name: &str, keyboard: &mut Keyboard) -> bool {
    fields
        .iter()
        .find(|field| field.name() == name)
        .is_some_and(|field| field.focus(keyboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Key;
    use crate::state::KeyboardEventKind;

    #[test]
    fn test_untagged_field_does_not_open() {
        let mut keyboard = Keyboard::new();
        let field = TextField::new("plain");
        assert!(!field.focus(&mut keyboard));
        assert!(!keyboard.is_open());
    }

    #[test]
    fn test_focus_seeds_keyboard() {
        let mut keyboard = Keyboard::new();
        let field = TextField::new("notes").with_keyboard(true);
        field.set_value("draft");

        assert!(field.focus(&mut keyboard));
        assert!(keyboard.is_open());
        assert_eq!(keyboard.value(), "draft");
    }

    #[test]
    fn test_focus_installs_both_handlers() {
        let mut keyboard = Keyboard::new();
        let field = TextField::new("notes").with_keyboard(true);
        field.focus(&mut keyboard);

        assert!(keyboard.has_handler(KeyboardEventKind::Input));
        assert!(keyboard.has_handler(KeyboardEventKind::Close));

        keyboard.press("z").unwrap();
        keyboard.press_key(Key::Done);
        assert_eq!(field.value(), "z");
        assert!(!keyboard.has_handler(KeyboardEventKind::Input));
    }

    #[test]
    fn test_edits_write_back() {
        let mut keyboard = Keyboard::new();
        let field = TextField::new("notes").with_keyboard(true);
        field.focus(&mut keyboard);

        keyboard.press("o").unwrap();
        keyboard.press("k").unwrap();
        assert_eq!(field.value(), "ok");

        keyboard.press_key(Key::Backspace);
        assert_eq!(field.value(), "o");
    }

    #[test]
    fn test_done_keeps_final_value() {
        let mut keyboard = Keyboard::new();
        let field = TextField::new("notes").with_keyboard(true);
        field.focus(&mut keyboard);

        keyboard.press("h").unwrap();
        keyboard.press("done").unwrap();

        assert_eq!(field.value(), "h");
        assert_eq!(keyboard.value(), "");
    }

    #[test]
    fn test_switching_fields() {
        let mut keyboard = Keyboard::new();
        let fields = vec![
            TextField::new("first").with_keyboard(true),
            TextField::new("second").with_keyboard(true),
        ];

        assert!(focus_field(&fields, "first", &mut keyboard));
        keyboard.press("a").unwrap();

        assert!(focus_field(&fields, "second", &mut keyboard));
        keyboard.press("b").unwrap();

        assert_eq!(fields[0].value(), "a");
        assert_eq!(fields[1].value(), "b");
        assert!(!focus_field(&fields, "missing", &mut keyboard));
    }

    #[test]
    fn test_shared_value_signal() {
        let mut keyboard = Keyboard::new();
        let shared = signal("x".to_string());
        let field = TextField::new("bound")
            .with_value(shared.clone())
            .with_keyboard(true);

        field.focus(&mut keyboard);
        keyboard.press("y").unwrap();
        assert_eq!(shared.get(), "xy");
    }
}
