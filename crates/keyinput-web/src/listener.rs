//! DOM listener lifecycle for the key input accumulator and the mouse tracker.
//!
//! Listeners are registered on construction and removed when the value is
//! dropped. State is shared with the event closures through a
//! [`SerialDispatcher`], so an event dispatched synchronously from inside a
//! callback is handled right after the current one instead of being lost.

use crate::event::{DomKeyEvent, DomMouseEvent};
use keyinput_core::{
    KeyInputAccumulator, KeyInputOptions, MouseEventKind, MouseOptions, MousePosition, MouseTracker,
    SerialDispatcher,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::EventTarget;

type SharedAccumulator = SerialDispatcher<KeyInputAccumulator<DomKeyEvent>, DomKeyEvent>;
type SharedTracker =
    SerialDispatcher<MouseTracker<DomMouseEvent>, (MouseEventKind, DomMouseEvent)>;

/// Key input accumulator bound to the `keydown` events of a target.
pub struct KeyInputListener {
    target: EventTarget,
    accumulator: SharedAccumulator,
    on_key_down: Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

impl KeyInputListener {
    /// Register a `keydown` listener on `target` feeding a new accumulator.
    pub fn attach(
        target: &EventTarget,
        options: KeyInputOptions<DomKeyEvent>,
    ) -> Result<Self, JsValue> {
        let accumulator = SerialDispatcher::new(KeyInputAccumulator::new(options));

        // `Fn` so that a keydown dispatched from a callback can re-enter.
        let shared = accumulator.clone();
        let on_key_down = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            shared.dispatch(DomKeyEvent::new(event), |accumulator, mut event| {
                accumulator.handle_key_down(&mut event);
            });
        }) as Box<dyn Fn(_)>);

        target
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        log::debug!("keydown listener attached");

        Ok(Self {
            target: target.clone(),
            accumulator,
            on_key_down,
        })
    }

    /// The current buffer, or `None` while an event is being handled.
    pub fn buffer(&self) -> Option<String> {
        self.accumulator
            .with_state(|accumulator| accumulator.buffer().to_string())
    }
}

impl Drop for KeyInputListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            "keydown",
            self.on_key_down.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove keydown listener: {err:?}");
        }
    }
}

/// Mouse tracker bound to the mouse button and movement events of a target.
pub struct MouseListener {
    target: EventTarget,
    tracker: SharedTracker,
    closures: Vec<(MouseEventKind, Closure<dyn Fn(web_sys::MouseEvent)>)>,
}

impl MouseListener {
    pub fn attach(
        target: &EventTarget,
        options: MouseOptions<DomMouseEvent>,
    ) -> Result<Self, JsValue> {
        let tracker = SerialDispatcher::new(MouseTracker::new(options));
        let mut listener = Self {
            target: target.clone(),
            tracker,
            closures: Vec::with_capacity(3),
        };

        // Pushed one by one so that Drop removes whatever was registered if a
        // later registration fails.
        for kind in [MouseEventKind::Down, MouseEventKind::Up, MouseEventKind::Move] {
            let closure = create_mouse_event_closure(kind, listener.tracker.clone());
            target.add_event_listener_with_callback(
                kind.event_type(),
                closure.as_ref().unchecked_ref(),
            )?;
            listener.closures.push((kind, closure));
        }
        log::debug!("mouse listeners attached");

        Ok(listener)
    }

    /// Current and previous positions, or `None` while an event is being handled.
    pub fn positions(&self) -> Option<(MousePosition, MousePosition)> {
        self.tracker
            .with_state(|tracker| (tracker.current(), tracker.previous()))
    }
}

impl Drop for MouseListener {
    fn drop(&mut self) {
        for (kind, closure) in &self.closures {
            if let Err(err) = self.target.remove_event_listener_with_callback(
                kind.event_type(),
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {} listener: {err:?}", kind.event_type());
            }
        }
    }
}

fn create_mouse_event_closure(
    kind: MouseEventKind,
    tracker: SharedTracker,
) -> Closure<dyn Fn(web_sys::MouseEvent)> {
    Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        tracker.dispatch((kind, DomMouseEvent(event)), |tracker, (kind, event)| {
            tracker.handle(kind, &event);
        });
    }) as Box<dyn Fn(_)>)
}
