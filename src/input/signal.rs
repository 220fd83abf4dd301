//! Broadcast channel with revocable, blockable subscriptions.
//!
//! A [`Signal`] holds an ordered list of callback slots. Subscribing
//! returns a [`Connection`] handle that can disconnect the slot
//! (also on drop) or temporarily block it without destroying it —
//! blocked slots simply skip emissions and never see a backlog when
//! unblocked.
//!
//! Everything is single-threaded (`Rc`/`RefCell`); emission is
//! synchronous. Callbacks may connect, disconnect, or block slots of
//! the same signal re-entrantly: each callback is taken out of its
//! slot for the duration of its call and restored afterwards, so the
//! registry is never borrowed while user code runs.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Slot<T> {
    id: u64,
    blocked: bool,
    // `None` only while the callback is being dispatched.
    callback: Option<Box<dyn FnMut(&T)>>,
}

struct Registry<T> {
    slots: Vec<Slot<T>>,
    next_id: u64,
}

impl<T> Registry<T> {
    fn slot_mut(&mut self, id: u64) -> Option<&mut Slot<T>> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    fn slot(&self, id: u64) -> Option<&Slot<T>> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}

// Type-erased slot operations so `Connection` does not carry the
// event-payload type parameter.
trait SlotControl {
    fn disconnect(&self, id: u64);
    fn set_blocked(&self, id: u64, blocked: bool);
    fn is_connected(&self, id: u64) -> bool;
    fn is_blocked(&self, id: u64) -> bool;
}

impl<T> SlotControl for RefCell<Registry<T>> {
    fn disconnect(&self, id: u64) {
        self.borrow_mut().slots.retain(|slot| slot.id != id);
    }

    fn set_blocked(&self, id: u64, blocked: bool) {
        if let Some(slot) = self.borrow_mut().slot_mut(id) {
            slot.blocked = blocked;
        }
    }

    fn is_connected(&self, id: u64) -> bool {
        self.borrow().slot(id).is_some()
    }

    fn is_blocked(&self, id: u64) -> bool {
        self.borrow().slot(id).is_some_and(|slot| slot.blocked)
    }
}

/// Handle to one subscription of a [`Signal`].
///
/// Dropping the handle disconnects the slot, so subscribers keep their
/// connections alive for as long as they want deliveries.
pub struct Connection {
    control: Weak<dyn SlotControl>,
    id: u64,
}

impl Connection {
    /// Permanently remove the slot. Idempotent; a disconnected slot
    /// cannot be revived or blocked.
    pub fn disconnect(&self) {
        if let Some(control) = self.control.upgrade() {
            control.disconnect(self.id);
        }
    }

    /// Suspend or resume delivery without destroying the slot.
    /// Emissions that happen while blocked are not replayed.
    pub fn set_blocked(&self, blocked: bool) {
        if let Some(control) = self.control.upgrade() {
            control.set_blocked(self.id, blocked);
        }
    }

    /// Whether the slot still exists (and its signal is still alive).
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.control
            .upgrade()
            .is_some_and(|control| control.is_connected(self.id))
    }

    /// Whether the slot is currently blocked.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.control
            .upgrade()
            .is_some_and(|control| control.is_blocked(self.id))
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// A broadcast channel delivering events to any number of subscribers.
pub struct Signal<T: 'static> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    /// Create a signal with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                slots: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe `callback` and return its [`Connection`] handle.
    ///
    /// Subscribers added from within a callback of the same signal do
    /// not see the emission that is currently being dispatched.
    #[must_use]
    pub fn connect(&self, callback: impl FnMut(&T) + 'static) -> Connection {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.slots.push(Slot {
                id,
                blocked: false,
                callback: Some(Box::new(callback)),
            });
            id
        };

        let control: Rc<dyn SlotControl> = self.registry.clone();
        Connection {
            control: Rc::downgrade(&control),
            id,
        }
    }

    /// Number of live subscriptions (blocked ones included).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    /// Deliver `value` to every unblocked subscriber, in subscription
    /// order.
    pub fn emit(&self, value: &T) {
        // Snapshot the ids first so callbacks can mutate the registry.
        let ids: Vec<u64> = self
            .registry
            .borrow()
            .slots
            .iter()
            .filter(|slot| !slot.blocked)
            .map(|slot| slot.id)
            .collect();

        for id in ids {
            let callback = self
                .registry
                .borrow_mut()
                .slot_mut(id)
                .filter(|slot| !slot.blocked)
                .and_then(|slot| slot.callback.take());

            let Some(mut callback) = callback else {
                continue;
            };
            callback(value);

            // The slot is gone if the callback disconnected itself.
            if let Some(slot) = self.registry.borrow_mut().slot_mut(id) {
                slot.callback = Some(callback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let signal = Signal::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let _a = signal.connect({
            let first = Rc::clone(&first);
            move |value: &i32| first.set(first.get() + value)
        });
        let _b = signal.connect({
            let second = Rc::clone(&second);
            move |value: &i32| second.set(second.get() + value)
        });

        signal.emit(&3);
        signal.emit(&4);
        assert_eq!(first.get(), 7);
        assert_eq!(second.get(), 7);
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let signal = Signal::new();
        let count = Rc::new(Cell::new(0));

        let connection = signal.connect({
            let count = Rc::clone(&count);
            move |(): &()| count.set(count.get() + 1)
        });

        signal.emit(&());
        connection.disconnect();
        signal.emit(&());

        assert_eq!(count.get(), 1);
        assert!(!connection.is_connected());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_disconnects() {
        let signal = Signal::new();
        let count = Rc::new(Cell::new(0));

        {
            let _connection = signal.connect({
                let count = Rc::clone(&count);
                move |(): &()| count.set(count.get() + 1)
            });
            signal.emit(&());
        }
        signal.emit(&());

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_block_suspends_without_replay() {
        let signal = Signal::new();
        let count = Rc::new(Cell::new(0));

        let connection = signal.connect({
            let count = Rc::clone(&count);
            move |(): &()| count.set(count.get() + 1)
        });

        signal.emit(&());
        connection.set_blocked(true);
        assert!(connection.is_blocked());
        assert!(connection.is_connected());

        // Missed while blocked; never replayed.
        signal.emit(&());
        signal.emit(&());

        connection.set_blocked(false);
        signal.emit(&());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_connect_during_emit_is_safe() {
        let signal: Rc<Signal<()>> = Rc::new(Signal::new());
        let late = Rc::new(Cell::new(0));
        let extra: Rc<RefCell<Vec<Connection>>> =
            Rc::new(RefCell::new(Vec::new()));

        let _connection = signal.connect({
            let signal = Rc::clone(&signal);
            let late = Rc::clone(&late);
            let extra = Rc::clone(&extra);
            move |(): &()| {
                let late = Rc::clone(&late);
                let connection =
                    signal.connect(move |(): &()| late.set(late.get() + 1));
                extra.borrow_mut().push(connection);
            }
        });

        // The subscriber added mid-emit only sees the next emission.
        signal.emit(&());
        assert_eq!(late.get(), 0);
        signal.emit(&());
        assert_eq!(late.get(), 1);
    }

    #[test]
    fn test_self_disconnect_during_emit_is_safe() {
        let signal = Signal::new();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Connection>>> =
            Rc::new(RefCell::new(None));

        let connection = signal.connect({
            let count = Rc::clone(&count);
            let slot = Rc::clone(&slot);
            move |(): &()| {
                count.set(count.get() + 1);
                if let Some(connection) = slot.borrow_mut().take() {
                    connection.disconnect();
                }
            }
        });
        *slot.borrow_mut() = Some(connection);

        signal.emit(&());
        signal.emit(&());
        assert_eq!(count.get(), 1);
    }
}
