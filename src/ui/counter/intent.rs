//! Intents for the counter screen.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Set the count back to zero.
    Reset,

    /// Fetch started or finished.
    SetLoading { loading: bool },

    /// Fetch failed. The message is shown as-is.
    SetError { message: String },

    /// Fetch succeeded: replace the count and clear any previous error.
    ApplyFetchedCount { value: i64 },
}

impl Intent for CounterIntent {}
