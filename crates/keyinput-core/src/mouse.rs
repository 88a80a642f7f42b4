//! Mouse position tracking.
//!
//! [`MouseTracker`] remembers where the pointer is and where it was on the
//! previous event, and forwards down/up/move events to optional callbacks
//! together with both positions.

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

impl MousePosition {
    pub const ORIGIN: MousePosition = MousePosition { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `other` to `self`.
    pub fn delta_from(&self, other: MousePosition) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// A raw mouse event as delivered by the host.
pub trait MouseEvent {
    fn client_x(&self) -> f64;

    fn client_y(&self) -> f64;

    /// Button index (0 = main, 1 = auxiliary, 2 = secondary).
    fn button(&self) -> i16;

    fn ctrl_key(&self) -> bool {
        false
    }

    fn alt_key(&self) -> bool {
        false
    }

    fn meta_key(&self) -> bool {
        false
    }

    fn shift_key(&self) -> bool {
        false
    }

    fn position(&self) -> MousePosition {
        MousePosition::new(self.client_x(), self.client_y())
    }
}

/// Owned mouse event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub button: i16,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }
}

impl MouseEvent for PointerEvent {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }

    fn button(&self) -> i16 {
        self.button
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
}

/// Types of mouse events the tracker handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down,
    Up,
    Move,
}

impl MouseEventKind {
    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            MouseEventKind::Down => "mousedown",
            MouseEventKind::Up => "mouseup",
            MouseEventKind::Move => "mousemove",
        }
    }
}

/// Callback receiving `(event, current, previous)`.
pub type MouseCallback<M> = Box<dyn FnMut(&M, MousePosition, MousePosition)>;

/// Optional callbacks for [`MouseTracker`].
pub struct MouseOptions<M> {
    on_mouse_down: Option<MouseCallback<M>>,
    on_mouse_up: Option<MouseCallback<M>>,
    on_mouse_move: Option<MouseCallback<M>>,
}

impl<M: MouseEvent> MouseOptions<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_down<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&M, MousePosition, MousePosition) + 'static,
    {
        self.on_mouse_down = Some(Box::new(callback));
        self
    }

    pub fn on_mouse_up<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&M, MousePosition, MousePosition) + 'static,
    {
        self.on_mouse_up = Some(Box::new(callback));
        self
    }

    pub fn on_mouse_move<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&M, MousePosition, MousePosition) + 'static,
    {
        self.on_mouse_move = Some(Box::new(callback));
        self
    }
}

impl<M> Default for MouseOptions<M> {
    fn default() -> Self {
        Self {
            on_mouse_down: None,
            on_mouse_up: None,
            on_mouse_move: None,
        }
    }
}

/// Current/previous pointer position bookkeeping.
pub struct MouseTracker<M> {
    current: MousePosition,
    previous: MousePosition,
    options: MouseOptions<M>,
}

impl<M: MouseEvent> MouseTracker<M> {
    pub fn new(options: MouseOptions<M>) -> Self {
        Self {
            current: MousePosition::ORIGIN,
            previous: MousePosition::ORIGIN,
            options,
        }
    }

    /// Record the event position and invoke the callback for `kind`.
    ///
    /// Positions are updated for every kind, whether or not a callback is set.
    pub fn handle(&mut self, kind: MouseEventKind, event: &M) {
        self.previous = self.current;
        self.current = event.position();

        let callback = match kind {
            MouseEventKind::Down => self.options.on_mouse_down.as_mut(),
            MouseEventKind::Up => self.options.on_mouse_up.as_mut(),
            MouseEventKind::Move => self.options.on_mouse_move.as_mut(),
        };
        if let Some(callback) = callback {
            callback(event, self.current, self.previous);
        }
    }

    pub fn current(&self) -> MousePosition {
        self.current
    }

    pub fn previous(&self) -> MousePosition {
        self.previous
    }

    /// Movement between the previous and the current position.
    pub fn delta(&self) -> (f64, f64) {
        self.current.delta_from(self.previous)
    }

    pub fn reset(&mut self) {
        self.current = MousePosition::ORIGIN;
        self.previous = MousePosition::ORIGIN;
    }
}

impl<M: MouseEvent> Default for MouseTracker<M> {
    fn default() -> Self {
        Self::new(MouseOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(MouseEventKind, MousePosition, MousePosition)>>>;

    fn recorder(
        calls: &Calls,
        kind: MouseEventKind,
    ) -> impl FnMut(&PointerEvent, MousePosition, MousePosition) {
        let calls = Rc::clone(calls);
        move |_, current, previous| calls.borrow_mut().push((kind, current, previous))
    }

    #[test]
    fn test_starts_at_origin() {
        let tracker = MouseTracker::<PointerEvent>::default();
        assert_eq!(tracker.current(), MousePosition::ORIGIN);
        assert_eq!(tracker.previous(), MousePosition::ORIGIN);
        assert_eq!(tracker.delta(), (0.0, 0.0));
    }

    #[test]
    fn test_previous_is_prior_current() {
        let mut tracker = MouseTracker::default();
        tracker.handle(MouseEventKind::Move, &PointerEvent::at(1.0, 2.0));
        tracker.handle(MouseEventKind::Move, &PointerEvent::at(4.0, 6.0));

        assert_eq!(tracker.previous(), MousePosition::new(1.0, 2.0));
        assert_eq!(tracker.current(), MousePosition::new(4.0, 6.0));
        assert_eq!(tracker.delta(), (3.0, 4.0));
    }

    #[test]
    fn test_callbacks_receive_positions() {
        let calls: Calls = Rc::default();
        let options = MouseOptions::new()
            .on_mouse_down(recorder(&calls, MouseEventKind::Down))
            .on_mouse_up(recorder(&calls, MouseEventKind::Up))
            .on_mouse_move(recorder(&calls, MouseEventKind::Move));
        let mut tracker = MouseTracker::new(options);

        tracker.handle(MouseEventKind::Down, &PointerEvent::at(1.0, 2.0));
        tracker.handle(MouseEventKind::Move, &PointerEvent::at(4.0, 6.0));
        tracker.handle(MouseEventKind::Up, &PointerEvent::at(4.0, 6.0).with_button(0));

        let origin = MousePosition::ORIGIN;
        let p1 = MousePosition::new(1.0, 2.0);
        let p2 = MousePosition::new(4.0, 6.0);
        assert_eq!(
            *calls.borrow(),
            vec![
                (MouseEventKind::Down, p1, origin),
                (MouseEventKind::Move, p2, p1),
                (MouseEventKind::Up, p2, p2),
            ]
        );
    }

    #[test]
    fn test_positions_update_without_callback() {
        let calls: Calls = Rc::default();
        let options = MouseOptions::new().on_mouse_up(recorder(&calls, MouseEventKind::Up));
        let mut tracker = MouseTracker::new(options);

        tracker.handle(MouseEventKind::Move, &PointerEvent::at(10.0, 10.0));
        tracker.handle(MouseEventKind::Up, &PointerEvent::at(12.0, 15.0));

        assert_eq!(
            *calls.borrow(),
            vec![(
                MouseEventKind::Up,
                MousePosition::new(12.0, 15.0),
                MousePosition::new(10.0, 10.0)
            )]
        );
    }

    #[test]
    fn test_reset() {
        let mut tracker = MouseTracker::default();
        tracker.handle(MouseEventKind::Move, &PointerEvent::at(3.0, 3.0));
        tracker.reset();
        assert_eq!(tracker.current(), MousePosition::ORIGIN);
        assert_eq!(tracker.previous(), MousePosition::ORIGIN);
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(MouseEventKind::Down.event_type(), "mousedown");
        assert_eq!(MouseEventKind::Up.event_type(), "mouseup");
        assert_eq!(MouseEventKind::Move.event_type(), "mousemove");
    }
}
