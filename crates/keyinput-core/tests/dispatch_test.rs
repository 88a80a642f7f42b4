// Events dispatched from inside callbacks, as a DOM host does synchronously

use keyinput_core::{
    KeyEvent, KeyInputAccumulator, KeyInputOptions, MouseEventKind, MouseOptions, MousePosition,
    MouseTracker, PointerEvent, SerialDispatcher,
};
use std::cell::RefCell;
use std::rc::Rc;

type KeyDispatcher = SerialDispatcher<KeyInputAccumulator<KeyEvent>, KeyEvent>;
type MouseDispatcher =
    SerialDispatcher<MouseTracker<PointerEvent>, (MouseEventKind, PointerEvent)>;

fn feed_key(accumulator: &mut KeyInputAccumulator<KeyEvent>, mut event: KeyEvent) {
    accumulator.handle_key_down(&mut event);
}

fn feed_mouse(
    tracker: &mut MouseTracker<PointerEvent>,
    (kind, event): (MouseEventKind, PointerEvent),
) {
    tracker.handle(kind, &event);
}

#[test]
fn test_keydown_from_sink_is_observed_and_handled() {
    let slot: Rc<RefCell<Option<KeyDispatcher>>> = Rc::new(RefCell::new(None));
    let updates = Rc::new(RefCell::new(Vec::new()));
    let observed = Rc::new(RefCell::new(Vec::new()));

    let options = {
        let slot = Rc::clone(&slot);
        let updates = Rc::clone(&updates);
        let observed = Rc::clone(&observed);
        KeyInputOptions::new(move |buffer: &str| {
            updates.borrow_mut().push(buffer.to_string());
            if buffer == "a" {
                if let Some(dispatcher) = slot.borrow().as_ref() {
                    assert!(!dispatcher.dispatch(KeyEvent::new("b"), feed_key));
                    assert!(!dispatcher.dispatch(KeyEvent::new("Shift"), feed_key));
                }
            }
        })
        .on_key_event(move |event: &KeyEvent| observed.borrow_mut().push(event.key.clone()))
    };

    let dispatcher = SerialDispatcher::new(KeyInputAccumulator::new(options));
    *slot.borrow_mut() = Some(dispatcher.clone());

    assert!(dispatcher.dispatch(KeyEvent::new("a"), feed_key));

    assert_eq!(*observed.borrow(), vec!["a", "b", "Shift"]);
    assert_eq!(*updates.borrow(), vec!["a", "b"]);
    assert_eq!(
        dispatcher.with_state(|input| input.buffer().to_string()),
        Some("b".to_string())
    );
    assert_eq!(dispatcher.pending_len(), 0);

    // Break the slot -> dispatcher -> options cycle.
    slot.borrow_mut().take();
}

#[test]
fn test_mouse_event_from_callback_updates_previous() {
    let slot: Rc<RefCell<Option<MouseDispatcher>>> = Rc::new(RefCell::new(None));
    let moves = Rc::new(RefCell::new(Vec::new()));

    let options = {
        let slot = Rc::clone(&slot);
        let moves = Rc::clone(&moves);
        MouseOptions::new()
            .on_mouse_down(move |_: &PointerEvent, _, _| {
                if let Some(dispatcher) = slot.borrow().as_ref() {
                    let event = (MouseEventKind::Move, PointerEvent::at(5.0, 6.0));
                    assert!(!dispatcher.dispatch(event, feed_mouse));
                }
            })
            .on_mouse_move(move |_: &PointerEvent, current, previous| {
                moves.borrow_mut().push((current, previous));
            })
    };

    let dispatcher = SerialDispatcher::new(MouseTracker::new(options));
    *slot.borrow_mut() = Some(dispatcher.clone());

    dispatcher.dispatch((MouseEventKind::Down, PointerEvent::at(1.0, 2.0)), feed_mouse);

    assert_eq!(
        *moves.borrow(),
        vec![(MousePosition::new(5.0, 6.0), MousePosition::new(1.0, 2.0))]
    );
    assert_eq!(
        dispatcher.with_state(|tracker| (tracker.current(), tracker.previous())),
        Some((MousePosition::new(5.0, 6.0), MousePosition::new(1.0, 2.0)))
    );

    slot.borrow_mut().take();
}
