//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use masked_input::cli::render_caret;
use masked_input::{FieldState, FormatKind, FormattedInput, Key, MemoryHost, TextHost};

pub type Notify = Box<dyn FnMut(&str)>;
pub type Emit = Box<dyn FnMut(&str, f64, &str, bool, &str)>;

/// A formatted input on an in-memory host that records everything it emits
pub struct TestInput {
    pub input: FormattedInput<MemoryHost, Notify, Emit>,
    pub emissions: Rc<RefCell<Vec<FieldState>>>,
    pub notices: Rc<RefCell<Vec<String>>>,
}

impl TestInput {
    pub fn new(kind: FormatKind, separator: char) -> Self {
        let emissions = Rc::new(RefCell::new(Vec::new()));
        let notices = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&emissions);
        let emit: Emit = Box::new(
            move |canonical: &str, numeric: f64, formatted: &str, valid: bool, error: &str| {
                sink.borrow_mut().push(FieldState {
                    canonical: canonical.to_string(),
                    numeric,
                    formatted: formatted.to_string(),
                    valid,
                    error_message: error.to_string(),
                });
            },
        );

        let inbox = Rc::clone(&notices);
        let notify: Notify = Box::new(move |message: &str| inbox.borrow_mut().push(message.to_string()));

        Self {
            input: FormattedInput::new(kind, separator, MemoryHost::new(), notify, emit),
            emissions,
            notices,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn press_named(&mut self, name: &str) {
        self.input.press(Key::from_name(name));
    }

    pub fn type_text(&mut self, text: &str) {
        self.input.type_text(text);
    }

    pub fn place_cursor(&mut self, offset: usize) {
        self.input.place_cursor(offset);
    }

    pub fn blur(&mut self) {
        self.input.blur();
    }

    /// Host text with `|` at the caret
    pub fn display(&self) -> String {
        let host = self.input.host();
        render_caret(&host.text(), host.cursor())
    }

    pub fn text(&self) -> String {
        self.input.host().text()
    }

    pub fn state(&self) -> FieldState {
        self.input.state().clone()
    }

    pub fn last_emission(&self) -> FieldState {
        self.emissions
            .borrow()
            .last()
            .cloned()
            .expect("nothing emitted yet")
    }

    pub fn emission_count(&self) -> usize {
        self.emissions.borrow().len()
    }

    pub fn formatted_history(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .map(|s| s.formatted.clone())
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

/// Empty phone number field with a `-` separator
pub fn phone_input() -> TestInput {
    TestInput::new(FormatKind::PhoneNumber, '-')
}

/// Empty currency field with a `,` separator
pub fn currency_input() -> TestInput {
    TestInput::new(FormatKind::Currency, ',')
}

/// Phone field already holding a complete number, caret at `cursor`
pub fn full_phone_input(cursor: usize) -> TestInput {
    let mut t = phone_input();
    t.type_text("5551234567");
    t.place_cursor(cursor);
    t
}
