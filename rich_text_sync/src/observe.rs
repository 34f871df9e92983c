// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded observer primitives.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt::Debug;

use smallvec::SmallVec;

type Slot<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
    slots: RefCell<SmallVec<[(u64, Slot<T>); 2]>>,
    next_id: Cell<u64>,
}

/// A list of listeners notified synchronously, in connection order.
///
/// Listeners may connect, disconnect and emit re-entrantly. A listener connected while an
/// emission is in progress is first notified by the next emission.
pub struct Signal<T: 'static> {
    inner: Rc<SignalInner<T>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(SignalInner {
                slots: RefCell::default(),
                next_id: Cell::new(0),
            }),
        }
    }
}

impl<T: 'static> Debug for Signal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    /// Create a signal with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `slot` to be called on every emission.
    ///
    /// The slot stays connected until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn connect(&self, slot: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.slots.borrow_mut().push((id, Rc::new(slot)));
        let inner = Rc::downgrade(&self.inner);
        Subscription {
            disconnect: Some(Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner.slots.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
                }
            })),
        }
    }

    /// Call every connected slot with `value`.
    pub fn emit(&self, value: &T) {
        // Slots may (dis)connect while we iterate, so work on a snapshot.
        let slots: SmallVec<[Slot<T>; 2]> = self
            .inner
            .slots
            .borrow()
            .iter()
            .map(|(_, slot)| slot.clone())
            .collect();
        for slot in slots {
            slot(value);
        }
    }

    /// The number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.inner.slots.borrow().len()
    }
}

/// Keeps a [`Signal`] slot connected.
///
/// Dropping the subscription disconnects the slot. Owners such as
/// [`RichTextCoordinator`](crate::RichTextCoordinator) hold their subscriptions, so releasing
/// the owner cancels all of them.
pub struct Subscription {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}

impl Subscription {
    /// Disconnect now rather than on drop.
    pub fn cancel(mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

/// A value which reports every write to its listeners.
///
/// Writes are reported even when the new value equals the old one; use
/// [`set_if_changed`](Self::set_if_changed) to skip those.
pub struct Observable<T: Clone + 'static> {
    value: RefCell<T>,
    changed: Signal<T>,
}

impl<T: Clone + Debug + 'static> Debug for Observable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value.borrow())
            .field("changed", &self.changed)
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            changed: Signal::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and notify listeners.
    pub fn set(&self, value: T) {
        self.value.replace(value.clone());
        self.changed.emit(&value);
    }

    /// Call `slot` with every value written from now on.
    #[must_use = "dropping the subscription disconnects the slot immediately"]
    pub fn subscribe(&self, slot: impl Fn(&T) + 'static) -> Subscription {
        self.changed.connect(slot)
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Store `value` and notify listeners, unless it equals the current value.
    ///
    /// Returns whether the value was written.
    pub fn set_if_changed(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        self.set(value);
        true
    }
}

/// A two-way view of a value owned elsewhere.
///
/// Reading calls the getter, writing calls the setter. Bindings are cheap to clone; clones share
/// their getter and setter.
pub struct Binding<T: 'static> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T: 'static> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<T: 'static> Debug for Binding<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding from a getter and a setter.
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Read the bound value.
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write the bound value.
    pub fn set(&self, value: T) {
        (self.set)(value);
    }
}

impl<T: Clone + 'static> Binding<T> {
    /// Create a binding to a shared cell.
    pub fn from_cell(cell: Rc<RefCell<T>>) -> Self {
        let setter = cell.clone();
        Self::new(
            move || cell.borrow().clone(),
            move |value| {
                setter.replace(value);
            },
        )
    }

    /// Create a binding to a fresh cell holding `value`.
    pub fn from_value(value: T) -> Self {
        Self::from_cell(Rc::new(RefCell::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Binding, Observable, Signal};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[test]
    fn dropping_subscription_disconnects() {
        let signal = Signal::<u32>::new();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let subscription = signal.connect(move |value| counter.set(counter.get() + value));
        signal.emit(&2);
        assert_eq!(signal.connection_count(), 1);
        drop(subscription);
        signal.emit(&3);
        assert_eq!(seen.get(), 2);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn reentrant_emit_and_connect() {
        let signal = Rc::new(Signal::<u32>::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let late = Rc::new(RefCell::new(None));

        let inner_signal = Rc::downgrade(&signal);
        let inner_log = log.clone();
        let inner_late = late.clone();
        let _outer = signal.connect(move |value| {
            inner_log.borrow_mut().push(*value);
            let Some(signal) = inner_signal.upgrade() else {
                return;
            };
            if *value == 1 {
                let late_log = inner_log.clone();
                let subscription = signal.connect(move |v| late_log.borrow_mut().push(v * 10));
                inner_late.replace(Some(subscription));
                signal.emit(&2);
            }
        });
        signal.emit(&1);
        // The nested emission already reaches the slot connected before it.
        assert_eq!(*log.borrow(), [1, 2, 20]);
    }

    #[test]
    fn observable_reports_every_write() {
        let observable = Observable::new(1_u32);
        let writes = Rc::new(Cell::new(0));
        let counter = writes.clone();
        let _subscription = observable.subscribe(move |_| counter.set(counter.get() + 1));
        observable.set(1);
        observable.set(1);
        assert_eq!(writes.get(), 2);
        assert!(!observable.set_if_changed(1));
        assert!(observable.set_if_changed(5));
        assert_eq!(writes.get(), 3);
        assert_eq!(observable.get(), 5);
    }

    #[test]
    fn binding_shares_cell() {
        let cell = Rc::new(RefCell::new(1));
        let binding = Binding::from_cell(cell.clone());
        binding.clone().set(4);
        assert_eq!(*cell.borrow(), 4);
        assert_eq!(binding.get(), 4);
    }
}
