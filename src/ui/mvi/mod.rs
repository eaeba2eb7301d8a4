//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ Store ──→ listeners ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view renders
//! - **Intent**: user gestures and async completions
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Store**: owns the current snapshot, runs the reducer and notifies
//!   subscribers when the snapshot changes

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
