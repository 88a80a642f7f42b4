//! Browser bindings for keyinput-core.
//!
//! Rust callers use [`KeyInputListener`] and [`MouseListener`] directly with
//! closures. JavaScript callers get [`WebKeyInput`] and [`WebMouseTracker`],
//! which take JS callback functions and a JSON key input configuration.

pub mod event;
pub mod listener;

pub use event::{DomKeyEvent, DomMouseEvent};
pub use listener::{KeyInputListener, MouseListener};

use keyinput_core::{KeyInputConfig, MouseEventKind, MouseOptions, MousePosition};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Function};
use web_sys::EventTarget;

/// Key input accumulator attached to a DOM target, for JavaScript callers.
#[wasm_bindgen]
pub struct WebKeyInput {
    listener: KeyInputListener,
}

#[wasm_bindgen]
impl WebKeyInput {
    /// Attach to `target`. `on_input_update` receives the buffer string after
    /// every accepted key. `config_json` is an optional `KeyInputConfig` document.
    #[wasm_bindgen(constructor)]
    pub fn new(
        target: &EventTarget,
        on_input_update: Function,
        config_json: Option<String>,
    ) -> Result<WebKeyInput, JsValue> {
        let config = match config_json {
            Some(json) => {
                KeyInputConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => KeyInputConfig::default(),
        };

        let options = config.into_options(move |buffer: &str| {
            if let Err(err) = on_input_update.call1(&JsValue::NULL, &JsValue::from_str(buffer)) {
                log::warn!("onInputUpdate threw: {err:?}");
            }
        });

        Ok(WebKeyInput {
            listener: KeyInputListener::attach(target, options)?,
        })
    }

    /// The current buffer; `undefined` while a key is being handled.
    pub fn buffer(&self) -> Option<String> {
        self.listener.buffer()
    }
}

/// Mouse tracker attached to a DOM target, for JavaScript callers.
///
/// Each callback is invoked as `(currentX, currentY, previousX, previousY, event)`.
#[wasm_bindgen]
pub struct WebMouseTracker {
    listener: MouseListener,
}

#[wasm_bindgen]
impl WebMouseTracker {
    #[wasm_bindgen(constructor)]
    pub fn new(
        target: &EventTarget,
        on_mouse_down: Option<Function>,
        on_mouse_up: Option<Function>,
        on_mouse_move: Option<Function>,
    ) -> Result<WebMouseTracker, JsValue> {
        let mut options = MouseOptions::new();
        if let Some(callback) = on_mouse_down {
            options = options.on_mouse_down(js_mouse_callback(MouseEventKind::Down, callback));
        }
        if let Some(callback) = on_mouse_up {
            options = options.on_mouse_up(js_mouse_callback(MouseEventKind::Up, callback));
        }
        if let Some(callback) = on_mouse_move {
            options = options.on_mouse_move(js_mouse_callback(MouseEventKind::Move, callback));
        }

        Ok(WebMouseTracker {
            listener: MouseListener::attach(target, options)?,
        })
    }

    /// `[currentX, currentY, previousX, previousY]`; empty while an event is being handled.
    pub fn positions(&self) -> Vec<f64> {
        match self.listener.positions() {
            Some((current, previous)) => vec![current.x, current.y, previous.x, previous.y],
            None => Vec::new(),
        }
    }
}

fn js_mouse_callback(
    kind: MouseEventKind,
    callback: Function,
) -> impl FnMut(&DomMouseEvent, MousePosition, MousePosition) {
    move |event, current, previous| {
        let args = Array::of5(
            &JsValue::from_f64(current.x),
            &JsValue::from_f64(current.y),
            &JsValue::from_f64(previous.x),
            &JsValue::from_f64(previous.y),
            &event.0,
        );
        if let Err(err) = callback.apply(&JsValue::NULL, &args) {
            log::warn!("{} callback threw: {err:?}", kind.event_type());
        }
    }
}
