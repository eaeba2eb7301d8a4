//! Observable state container.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::reducer::Reducer;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

/// Holds the current snapshot for one screen and serializes every
/// transition through `R::reduce`.
///
/// The state lock is the single coordinating context: reduce-and-store is
/// atomic, so dispatches from the display loop and from background tasks
/// never interleave within one transition. Listeners run after the lock is
/// released and may call back into the store.
pub struct Store<R: Reducer> {
    state: Mutex<R::State>,
    listeners: Arc<Mutex<Listeners<R::State>>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Mutex::new(initial),
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Run the reducer and notify subscribers if the snapshot changed.
    pub fn dispatch(&self, intent: R::Intent) {
        let changed = {
            let mut state = self.state.lock();
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                None
            } else {
                *state = next.clone();
                Some(next)
            }
        };

        if let Some(snapshot) = changed {
            self.notify(&snapshot);
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Read a projection of the current snapshot without cloning all of it.
    pub fn read<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        let state = self.state.lock();
        f(&*state)
    }

    /// Register `listener` to be called with each new snapshot.
    ///
    /// The listener stays registered until the returned token is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let listener: Listener<R::State> = Arc::new(listener);
        listeners.entries.push((id, listener));
        tracing::trace!(id, "Listener subscribed");

        let weak = Arc::downgrade(&self.listeners);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                remove_listener(&weak, id);
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    fn notify(&self, snapshot: &R::State) {
        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

fn remove_listener<S>(registry: &Weak<Mutex<Listeners<S>>>, id: u64) {
    // Store already gone; nothing left to unregister from.
    let Some(registry) = registry.upgrade() else {
        return;
    };
    registry.lock().entries.retain(|(entry_id, _)| *entry_id != id);
    tracing::trace!(id, "Listener unsubscribed");
}

/// Token returned by [`Store::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the token.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
