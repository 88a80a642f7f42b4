//! Adapters from DOM events to the core event traits.

use keyinput_core::{KeyboardEvent, MouseEvent};

/// A DOM `keydown` event seen through [`KeyboardEvent`].
///
/// The key name is read once on construction so that handlers can borrow it.
pub struct DomKeyEvent {
    event: web_sys::KeyboardEvent,
    key: String,
}

impl DomKeyEvent {
    pub fn new(event: web_sys::KeyboardEvent) -> Self {
        let key = event.key();
        Self { event, key }
    }

    /// The underlying DOM event.
    pub fn inner(&self) -> &web_sys::KeyboardEvent {
        &self.event
    }
}

impl KeyboardEvent for DomKeyEvent {
    fn key(&self) -> &str {
        &self.key
    }

    fn ctrl_key(&self) -> bool {
        self.event.ctrl_key()
    }

    fn alt_key(&self) -> bool {
        self.event.alt_key()
    }

    fn meta_key(&self) -> bool {
        self.event.meta_key()
    }

    fn shift_key(&self) -> bool {
        self.event.shift_key()
    }

    fn prevent_default(&mut self) {
        self.event.prevent_default();
    }
}

/// A DOM mouse event seen through [`MouseEvent`].
pub struct DomMouseEvent(pub web_sys::MouseEvent);

impl MouseEvent for DomMouseEvent {
    fn client_x(&self) -> f64 {
        f64::from(self.0.client_x())
    }

    fn client_y(&self) -> f64 {
        f64::from(self.0.client_y())
    }

    fn button(&self) -> i16 {
        self.0.button()
    }

    fn ctrl_key(&self) -> bool {
        self.0.ctrl_key()
    }

    fn alt_key(&self) -> bool {
        self.0.alt_key()
    }

    fn meta_key(&self) -> bool {
        self.0.meta_key()
    }

    fn shift_key(&self) -> bool {
        self.0.shift_key()
    }
}
