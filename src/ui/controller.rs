//! Intent layer for the counter screen.
//!
//! Translates view gestures into store operations and runs the on-appear
//! fetch. The controller never keeps the store alive: once the screen drops
//! its `Arc<CounterStore>`, every operation here silently does nothing.

use std::sync::{Arc, Weak};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::service::CounterService;
use crate::ui::counter::CounterStore;

#[derive(Clone)]
pub struct CounterController {
    store: Weak<CounterStore>,
    service: Arc<dyn CounterService>,
}

impl CounterController {
    pub fn new(store: &Arc<CounterStore>, service: Arc<dyn CounterService>) -> Self {
        Self {
            store: Arc::downgrade(store),
            service,
        }
    }

    pub fn tap_increment(&self) {
        if let Some(store) = self.store.upgrade() {
            store.increment();
        }
    }

    pub fn tap_decrement(&self) {
        if let Some(store) = self.store.upgrade() {
            store.decrement();
        }
    }

    pub fn tap_reset(&self) {
        if let Some(store) = self.store.upgrade() {
            store.reset();
        }
    }

    /// Start loading the count from the service.
    ///
    /// `is_loading` is set before this returns; the fetch itself runs on a
    /// spawned task that clears the flag and applies the value or the error.
    /// Returns `None` without spawning if the store is already gone. The
    /// handle may be dropped; it is only needed to wait for completion.
    ///
    /// Overlapping calls are not coalesced: each one fetches and the last
    /// to finish wins.
    ///
    /// Outside a tokio runtime nothing is spawned, the state is left
    /// untouched and `None` is returned. Aborting the returned handle
    /// before it completes leaves `is_loading` set; drop it instead.
    pub fn handle_on_appear(&self) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::warn!(error = %err, "No async runtime, skipping count fetch");
                return None;
            }
        };

        let store = self.store.upgrade()?;
        store.set_loading(true);
        drop(store);

        let store = self.store.clone();
        let service = Arc::clone(&self.service);
        Some(runtime.spawn(async move {
            tracing::debug!("Fetching count");
            let result = service.fetch_count().await;

            let Some(store) = store.upgrade() else {
                tracing::debug!(
                    ?result,
                    "Counter screen closed before fetch resolved, dropping result"
                );
                return;
            };

            store.set_loading(false);
            match result {
                Ok(value) => {
                    tracing::debug!(value, "Fetched count");
                    store.apply_fetched_count(value);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to fetch count");
                    store.set_error(format!("Failed to fetch count: {}", err));
                }
            }
        }))
    }
}
