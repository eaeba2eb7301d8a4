//! Counter screen feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot rendered by the view (count, loading, error)
//! - `intent.rs` - Gestures and fetch completions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Named operations on the observable store

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterViewState;
pub use store::CounterStore;
