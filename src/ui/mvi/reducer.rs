use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` must be pure and total: no I/O, no panics, every intent maps
/// to some next state (possibly the same one).
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
