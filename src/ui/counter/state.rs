//! State for the counter screen.

use crate::ui::mvi::UiState;

/// Everything the counter view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterViewState {
    pub count: i64,
    /// True only while a fetch is in flight.
    pub is_loading: bool,
    /// Set after a failed fetch, cleared once a fetched count is applied.
    pub error_message: Option<String>,
}

impl UiState for CounterViewState {}

impl CounterViewState {
    pub fn with_count(count: i64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}
