// Shared recorder for accumulator integration tests

#![allow(dead_code)]

use keyinput_core::{KeyEvent, KeyInputOptions};
use std::cell::RefCell;
use std::rc::Rc;

/// Captures every buffer reported to the sink and every observed key.
#[derive(Clone, Default)]
pub struct Recorder {
    updates: Rc<RefCell<Vec<String>>>,
    observed: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options whose sink and key observer both write into this recorder.
    pub fn options(&self) -> KeyInputOptions<KeyEvent> {
        let updates = Rc::clone(&self.updates);
        let observed = Rc::clone(&self.observed);
        KeyInputOptions::new(move |buffer: &str| updates.borrow_mut().push(buffer.to_string()))
            .on_key_event(move |event: &KeyEvent| observed.borrow_mut().push(event.key.clone()))
    }

    pub fn updates(&self) -> Vec<String> {
        self.updates.borrow().clone()
    }

    pub fn observed(&self) -> Vec<String> {
        self.observed.borrow().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.borrow().len()
    }
}

pub fn delete_last(buffer: &str, _event: &KeyEvent) -> String {
    let mut text = buffer.to_string();
    text.pop();
    text
}
