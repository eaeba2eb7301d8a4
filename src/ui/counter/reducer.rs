//! Reducer for the counter screen.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterViewState;

/// Counter state transitions.
///
/// Arithmetic wraps at the `i64` bounds rather than panicking, so every
/// intent is total.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterViewState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterViewState {
                count: state.count.wrapping_add(1),
                ..state
            },
            CounterIntent::Decrement => CounterViewState {
                count: state.count.wrapping_sub(1),
                ..state
            },
            CounterIntent::Reset => CounterViewState { count: 0, ..state },
            CounterIntent::SetLoading { loading } => CounterViewState {
                is_loading: loading,
                ..state
            },
            CounterIntent::SetError { message } => CounterViewState {
                error_message: Some(message),
                ..state
            },
            CounterIntent::ApplyFetchedCount { value } => CounterViewState {
                count: value,
                error_message: None,
                ..state
            },
        }
    }
}
