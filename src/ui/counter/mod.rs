//! Counter store feature module.
//!
//! Single source of truth for the counter value.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The counter value
//! - `intent.rs` - Store operations (Increment, Decrement, Set)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Owns the state, runs the reducer, notifies subscribers

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use store::{CounterStore, SubscriptionId};
