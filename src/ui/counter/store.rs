use crate::ui::mvi::Store;

use super::intent::CounterIntent;
use super::reducer::CounterReducer;

/// Observable counter state for one screen session.
///
/// Shared as `Arc<CounterStore>`; the controller keeps only a `Weak`.
pub type CounterStore = Store<CounterReducer>;

impl Store<CounterReducer> {
    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&self) {
        self.dispatch(CounterIntent::Reset);
    }

    pub fn set_loading(&self, loading: bool) {
        self.dispatch(CounterIntent::SetLoading { loading });
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.dispatch(CounterIntent::SetError {
            message: message.into(),
        });
    }

    /// Clear any error and replace the count with a fetched value.
    pub fn apply_fetched_count(&self, value: i64) {
        self.dispatch(CounterIntent::ApplyFetchedCount { value });
    }

    /// Same transition as [`apply_fetched_count`](Self::apply_fetched_count).
    pub fn set_count(&self, value: i64) {
        self.apply_fetched_count(value);
    }

    pub fn count(&self) -> i64 {
        self.read(|state| state.count)
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.is_loading)
    }

    pub fn error_message(&self) -> Option<String> {
        self.read(|state| state.error_message.clone())
    }
}
