//! Key-down event definitions.
//!
//! The accumulator is written against the [`KeyboardEvent`] trait so that any
//! host event (a DOM `KeyboardEvent`, a recorded test event, a decoded JSON
//! record) can drive it. [`KeyEvent`] is the owned implementation used by
//! tests, demos and the serialised surface.

use crate::error::{KeyInputError, KeyInputResult};

/// A raw key-down occurrence as delivered by the host.
pub trait KeyboardEvent {
    /// Key name as reported by the host, e.g. `"a"`, `"A"`, `"Backspace"`.
    fn key(&self) -> &str;

    fn ctrl_key(&self) -> bool;

    fn alt_key(&self) -> bool;

    fn meta_key(&self) -> bool;

    /// Informational only: the effect of shift is already part of [`key`](Self::key).
    fn shift_key(&self) -> bool;

    /// Suppress the host's default action for this event.
    fn prevent_default(&mut self);

    /// Whether any of ctrl, alt or meta is held.
    fn has_command_modifier(&self) -> bool {
        self.ctrl_key() || self.alt_key() || self.meta_key()
    }
}

/// Owned key-down event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key name
    pub key: String,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    default_prevented: bool,
}

impl KeyEvent {
    /// Create an event for `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Whether [`KeyboardEvent::prevent_default`] has been called on this event.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Parse a descriptor such as `"Ctrl+Shift+A"` into an event.
    ///
    /// Modifier names are case-insensitive (`ctrl`/`control`, `alt`/`option`,
    /// `meta`/`cmd`/`super`, `shift`). The last segment is the key name and is
    /// kept verbatim, except that `Space` stands for `" "`.
    /// `"Ctrl++"` names the `+` key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyinput_core::key::KeyEvent;
    ///
    /// let event = KeyEvent::parse("Ctrl+Shift+A").unwrap();
    /// assert_eq!(event.key, "A");
    /// assert!(event.ctrl_key && event.shift_key);
    /// ```
    pub fn parse(descriptor: &str) -> KeyInputResult<Self> {
        if descriptor.is_empty() {
            return Err(KeyInputError::invalid_descriptor("empty descriptor"));
        }

        let (modifiers, key) = if descriptor == "+" {
            ("", "+")
        } else if let Some(prefix) = descriptor.strip_suffix("++") {
            (prefix, "+")
        } else {
            descriptor.rsplit_once('+').unwrap_or(("", descriptor))
        };

        if key.is_empty() {
            return Err(KeyInputError::invalid_descriptor(format!(
                "empty key name in '{descriptor}'"
            )));
        }

        let mut event = KeyEvent::new(named_key(key));
        if modifiers.is_empty() {
            return Ok(event);
        }

        for modifier in modifiers.split('+') {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => event.ctrl_key = true,
                "alt" | "option" => event.alt_key = true,
                "meta" | "cmd" | "super" => event.meta_key = true,
                "shift" => event.shift_key = true,
                _ => {
                    return Err(KeyInputError::invalid_descriptor(format!(
                        "unknown modifier '{modifier}' in '{descriptor}'"
                    )))
                }
            }
        }

        Ok(event)
    }
}

fn named_key(key: &str) -> &str {
    if key.eq_ignore_ascii_case("space") {
        " "
    } else {
        key
    }
}

impl KeyboardEvent for KeyEvent {
    fn key(&self) -> &str {
        &self.key
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn alt_key(&self) -> bool {
        self.alt_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
