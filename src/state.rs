//! Observable state handles
//!
//! Controls never hold a copy of the value they edit. They hold a [`State`]
//! handle, read it at render time and write through it on interaction, so a view
//! produced by a registry factory always reflects the current value, no matter
//! how many times the factory has run.
//!
//! A `State` wraps a [`spark_signals::Signal`]. Observers registered with
//! [`State::subscribe`] are effects over that signal and run after every
//! change. Signals are bound to the thread that created them, and so is every
//! handle cloned from one.

use spark_signals::{Signal, effect, signal};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identifier returned by [`State::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StopEffect = Box<dyn FnOnce()>;

#[derive(Default)]
struct Subscriptions {
    next: Cell<u64>,
    active: RefCell<Vec<(SubscriptionId, StopEffect)>>,
}

/// Shared, observable value
///
/// Cloning a `State` clones the handle, not the value.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    version: Rc<Cell<u64>>,
    subscriptions: Rc<Subscriptions>,
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> State<T> {
    /// Create a new state holding `value`
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            signal: signal(value),
            version: Rc::new(Cell::new(0)),
            subscriptions: Rc::new(Subscriptions::default()),
        }
    }

    /// Clone out the current value
    #[must_use]
    pub fn get(&self) -> T {
        self.signal.get()
    }

    /// Read the current value through a closure
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.signal.get())
    }

    /// Replace the value and notify observers
    pub fn set(&self, value: T) {
        self.version.set(self.version.get() + 1);
        self.signal.set(value);
    }

    /// Mutate the value in place and notify observers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.signal.get();
        f(&mut value);
        self.set(value);
    }

    /// Number of writes since creation
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Register an observer, called with the new value after every change
    ///
    /// The observer is not called for the value current at subscription time.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> SubscriptionId {
        let source = self.signal.clone();
        let mut primed = false;
        let stop = effect(move || {
            let value = source.get();
            if primed {
                observer(&value);
            }
            primed = true;
        });

        let id = SubscriptionId(self.subscriptions.next.get());
        self.subscriptions.next.set(id.0 + 1);
        self.subscriptions
            .active
            .borrow_mut()
            .push((id, Box::new(stop)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = {
            let mut active = self.subscriptions.active.borrow_mut();
            active
                .iter()
                .position(|(existing, _)| *existing == id)
                .map(|index| active.remove(index))
        };
        match removed {
            Some((_, stop)) => {
                stop();
                true
            }
            None => false,
        }
    }

    /// Whether two handles share the same underlying value
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.version, &other.version)
    }
}
