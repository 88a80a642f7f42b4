//! Serial event dispatch over shared state.
//!
//! Host callbacks can dispatch a new event synchronously while an earlier one
//! is still being handled (a sink calling `dispatchEvent` in the browser). The
//! state is already mutably borrowed at that point, so the nested event is
//! queued and handled by the outer dispatch once the current event finishes.
//! Every event is handled exactly once, in arrival order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Shared state plus a queue of events waiting for it.
///
/// Clones share the same state and queue.
pub struct SerialDispatcher<S, E> {
    state: Rc<RefCell<S>>,
    pending: Rc<RefCell<VecDeque<E>>>,
}

impl<S, E> SerialDispatcher<S, E> {
    pub fn new(state: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Handle `event`, then every event queued while it was being handled.
    ///
    /// Returns `false` when the state is busy; the event is then queued and
    /// handled by the dispatch that holds the state, or by the next one.
    pub fn dispatch<F>(&self, event: E, mut handle: F) -> bool
    where
        F: FnMut(&mut S, E),
    {
        self.pending.borrow_mut().push_back(event);

        let Ok(mut state) = self.state.try_borrow_mut() else {
            log::trace!("event queued behind the one being handled");
            return false;
        };

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            handle(&mut *state, event);
        }
        true
    }

    /// Read the state, or `None` while an event is being handled.
    pub fn with_state<R>(&self, read: impl FnOnce(&S) -> R) -> Option<R> {
        self.state.try_borrow().ok().map(|state| read(&*state))
    }

    /// Number of events waiting for the state.
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl<S, E> Clone for SerialDispatcher<S, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<S, E> fmt::Debug for SerialDispatcher<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialDispatcher")
            .field("busy", &self.state.try_borrow_mut().is_err())
            .field("pending", &self.pending_len())
            .finish()
    }
}
