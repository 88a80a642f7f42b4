//! Serialisable configuration and event records for hosts that talk JSON.
//! Only available with the `wasm` feature.

#[cfg(feature = "wasm")]
pub use self::wasm_impl::*;

#[cfg(feature = "wasm")]
mod wasm_impl {
    use crate::{
        accumulator::{KeyInputAccumulator, KeyInputOptions, KeyOutcome, SpecialKeyAction},
        error::KeyInputResult,
        key::{KeyEvent, KeyboardEvent},
    };
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    /// Declarative accumulator configuration.
    ///
    /// ```json
    /// {
    ///   "accept_pattern": "[a-z]",
    ///   "special_keys": { "Backspace": "delete_last", "Tab": { "append": "  " } }
    /// }
    /// ```
    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    #[serde(default)]
    pub struct KeyInputConfig {
        /// Acceptance pattern; absent or invalid means the default pattern
        pub accept_pattern: Option<String>,
        pub special_keys: BTreeMap<String, SpecialKeyAction>,
    }

    impl KeyInputConfig {
        pub fn from_json(json: &str) -> KeyInputResult<Self> {
            Ok(serde_json::from_str(json)?)
        }

        /// Build accumulator options around `on_input_update`.
        pub fn into_options<E, F>(self, on_input_update: F) -> KeyInputOptions<E>
        where
            E: KeyboardEvent,
            F: FnMut(&str) + 'static,
        {
            let mut options = KeyInputOptions::new(on_input_update);
            if let Some(pattern) = &self.accept_pattern {
                options = options.accept_pattern(pattern);
            }
            for (key, action) in self.special_keys {
                options = options.special_key_action(key, action);
            }
            options
        }
    }

    /// Serialisable version of [`KeyEvent`].
    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    #[serde(default)]
    pub struct WasmKeyEvent {
        pub key: String,
        pub ctrl_key: bool,
        pub alt_key: bool,
        pub meta_key: bool,
        pub shift_key: bool,
    }

    impl From<KeyEvent> for WasmKeyEvent {
        fn from(event: KeyEvent) -> Self {
            WasmKeyEvent {
                key: event.key,
                ctrl_key: event.ctrl_key,
                alt_key: event.alt_key,
                meta_key: event.meta_key,
                shift_key: event.shift_key,
            }
        }
    }

    impl From<WasmKeyEvent> for KeyEvent {
        fn from(wasm_event: WasmKeyEvent) -> Self {
            let mut event = KeyEvent::new(wasm_event.key);
            event.ctrl_key = wasm_event.ctrl_key;
            event.alt_key = wasm_event.alt_key;
            event.meta_key = wasm_event.meta_key;
            event.shift_key = wasm_event.shift_key;
            event
        }
    }

    /// Result of handling one event, reported back to the host.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct WasmKeyOutcome {
        pub accepted: bool,
        pub buffer: String,
        pub default_prevented: bool,
    }

    impl WasmKeyOutcome {
        pub fn new(outcome: KeyOutcome, event: &KeyEvent, buffer: &str) -> Self {
            WasmKeyOutcome {
                accepted: outcome.is_accepted(),
                buffer: buffer.to_string(),
                default_prevented: event.default_prevented(),
            }
        }
    }

    /// Decode a JSON key event, feed it to `input` and return JSON describing
    /// the outcome.
    pub fn handle_key_json(
        input: &mut KeyInputAccumulator<KeyEvent>,
        event_json: &str,
    ) -> KeyInputResult<String> {
        let wasm_event: WasmKeyEvent = serde_json::from_str(event_json)?;
        let mut event = KeyEvent::from(wasm_event);
        let outcome = input.handle_key_down(&mut event);
        let report = WasmKeyOutcome::new(outcome, &event, input.buffer());
        Ok(serde_json::to_string(&report)?)
    }

}
