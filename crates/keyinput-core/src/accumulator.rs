//! Key input accumulator.
//!
//! [`KeyInputAccumulator`] owns a single text buffer and updates it on every
//! key-down event it is handed. Each event goes through these steps in order:
//!
//! 1. the optional key observer sees the raw event;
//! 2. a special-key handler registered for the key name replaces the buffer
//!    with its return value, even when that value is unchanged;
//! 3. otherwise, a key with no ctrl/alt/meta modifier whose name passes the
//!    [`AcceptFilter`] has its default action suppressed and *overwrites* the
//!    buffer;
//! 4. any other key is ignored.
//!
//! Steps 2 and 3 are "accepted" and report the new buffer to the sink exactly
//! once.

use crate::{filter::AcceptFilter, key::KeyboardEvent};
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Sink receiving the buffer after every accepted event.
pub type InputUpdateCallback = Box<dyn FnMut(&str)>;

/// Observer invoked for every incoming event.
pub type KeyEventCallback<E> = Box<dyn FnMut(&E)>;

/// Transform `(buffer, event) -> new buffer` for one named key.
pub type SpecialKeyHandler<E> = Box<dyn Fn(&str, &E) -> String>;

/// Path an event took through the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A special-key handler produced the new buffer.
    Special,
    /// The key name replaced the buffer.
    Regular,
    /// Nothing changed and the sink was not called.
    Ignored,
}

impl KeyOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Declarative buffer edit for hosts that cannot supply a closure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "wasm",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpecialKeyAction {
    /// Leave the buffer as is. The sink still fires.
    Keep,
    /// Empty the buffer.
    Clear,
    /// Remove the last character.
    DeleteLast,
    Append(String),
    Replace(String),
}

impl SpecialKeyAction {
    /// Apply the edit to `buffer`.
    pub fn apply(&self, buffer: &str) -> String {
        match self {
            SpecialKeyAction::Keep => buffer.to_string(),
            SpecialKeyAction::Clear => String::new(),
            SpecialKeyAction::DeleteLast => {
                let mut text = buffer.to_string();
                text.pop();
                text
            }
            SpecialKeyAction::Append(suffix) => format!("{buffer}{suffix}"),
            SpecialKeyAction::Replace(text) => text.clone(),
        }
    }
}

/// Construction options for [`KeyInputAccumulator`].
///
/// Only the sink is required. Without special keys every key goes through
/// the acceptance filter; without a filter the
/// [default pattern](crate::filter::DEFAULT_ACCEPT_PATTERN) is used.
pub struct KeyInputOptions<E> {
    on_input_update: InputUpdateCallback,
    special_key_handlers: HashMap<String, SpecialKeyHandler<E>>,
    on_key_event: Option<KeyEventCallback<E>>,
    accept_filter: AcceptFilter,
}

impl<E: KeyboardEvent> KeyInputOptions<E> {
    /// Create options with the required sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyinput_core::{KeyEvent, KeyInputAccumulator, KeyInputOptions};
    ///
    /// let options = KeyInputOptions::<KeyEvent>::new(|buffer| println!("{buffer}"))
    ///     .accept_pattern("[a-z]")
    ///     .special_key("Backspace", |buffer, _event| {
    ///         let mut text = buffer.to_string();
    ///         text.pop();
    ///         text
    ///     });
    ///
    /// let mut input = KeyInputAccumulator::new(options);
    /// input.handle_key_down(&mut KeyEvent::new("a"));
    /// assert_eq!(input.buffer(), "a");
    /// ```
    pub fn new<F>(on_input_update: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        Self {
            on_input_update: Box::new(on_input_update),
            special_key_handlers: HashMap::new(),
            on_key_event: None,
            accept_filter: AcceptFilter::default(),
        }
    }

    /// Register `handler` for the key named `key`, replacing any previous one.
    pub fn special_key<F>(mut self, key: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &E) -> String + 'static,
    {
        self.special_key_handlers
            .insert(key.into(), Box::new(handler));
        self
    }

    /// Register a declarative edit for the key named `key`.
    pub fn special_key_action(self, key: impl Into<String>, action: SpecialKeyAction) -> Self {
        self.special_key(key, move |buffer, _| action.apply(buffer))
    }

    /// Observe every incoming event before it is processed.
    pub fn on_key_event<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&E) + 'static,
    {
        self.on_key_event = Some(Box::new(observer));
        self
    }

    /// Use `pattern` as the acceptance filter. An invalid pattern falls back
    /// to the default filter.
    pub fn accept_pattern(mut self, pattern: &str) -> Self {
        self.accept_filter = AcceptFilter::or_default(Some(pattern));
        self
    }

    pub fn accept_filter(mut self, filter: AcceptFilter) -> Self {
        self.accept_filter = filter;
        self
    }
}

/// Managed text input driven by key-down events.
pub struct KeyInputAccumulator<E> {
    buffer: String,
    on_input_update: InputUpdateCallback,
    special_key_handlers: HashMap<String, SpecialKeyHandler<E>>,
    on_key_event: Option<KeyEventCallback<E>>,
    accept_filter: AcceptFilter,
}

impl<E: KeyboardEvent> KeyInputAccumulator<E> {
    /// Create an accumulator with an empty buffer.
    pub fn new(options: KeyInputOptions<E>) -> Self {
        log::debug!(
            "key input created: filter={:?}, special keys={}",
            options.accept_filter.as_str(),
            options.special_key_handlers.len()
        );

        Self {
            buffer: String::new(),
            on_input_update: options.on_input_update,
            special_key_handlers: options.special_key_handlers,
            on_key_event: options.on_key_event,
            accept_filter: options.accept_filter,
        }
    }

    /// Process one key-down event.
    pub fn handle_key_down(&mut self, event: &mut E) -> KeyOutcome {
        if let Some(observer) = self.on_key_event.as_mut() {
            observer(&*event);
        }

        let outcome = if let Some(handler) = self.special_key_handlers.get(event.key()) {
            self.buffer = handler(&self.buffer, &*event);
            KeyOutcome::Special
        } else if !event.has_command_modifier() && self.accept_filter.accepts(event.key()) {
            event.prevent_default();
            self.buffer = event.key().to_string();
            KeyOutcome::Regular
        } else {
            KeyOutcome::Ignored
        };

        log::trace!("key down {:?}: {:?}", event.key(), outcome);

        if outcome.is_accepted() {
            (self.on_input_update)(&self.buffer);
        }
        outcome
    }

    /// The current buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether a special-key handler is registered for `key`.
    pub fn handles_key(&self, key: &str) -> bool {
        self.special_key_handlers.contains_key(key)
    }

    pub fn accept_filter(&self) -> &AcceptFilter {
        &self.accept_filter
    }
}

impl<E> fmt::Debug for KeyInputAccumulator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut special_keys: Vec<&str> =
            self.special_key_handlers.keys().map(String::as_str).collect();
        special_keys.sort_unstable();

        f.debug_struct("KeyInputAccumulator")
            .field("buffer", &self.buffer)
            .field("accept_filter", &self.accept_filter)
            .field("special_keys", &special_keys)
            .field("on_key_event", &self.on_key_event.is_some())
            .finish()
    }
}
