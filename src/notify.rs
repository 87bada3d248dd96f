//! Synchronous change notification.
//!
//! A [`Notifier`] keeps an ordered list of observers and calls each of them,
//! on the current thread, every time [`Notifier::notify`] runs. Subscribing
//! hands back a [`Subscription`] guard; dropping the guard removes the
//! observer before the next notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Slots<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

pub struct Notifier<T: ?Sized> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: ?Sized + 'static> Notifier<T> {
    pub fn new() -> Self {
        Notifier {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `observer`; it stays registered while the returned guard
    /// lives.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let callback: Callback<T> = Rc::new(observer);
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, callback));
            id
        };
        log::debug!("Observer {id} subscribed.");

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription {
            id,
            detach: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().entries.retain(|(slot, _)| *slot != id);
                    log::debug!("Observer {id} unsubscribed.");
                }
            })),
        }
    }

    /// Calls every observer in registration order.
    pub fn notify(&self, value: &T) {
        // Snapshot the list so an observer may drop its own guard mid-fan-out.
        let observers: Vec<Callback<T>> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        log::trace!("Notifying {} observer(s).", observers.len());
        for observer in observers {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized + 'static> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.slots.borrow().entries.len())
            .finish()
    }
}

/// Keeps one observer registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the observer immediately"]
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
