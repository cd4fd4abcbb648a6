//! Model-View-Intent (MVI) primitives.
//!
//! The counter store is built on these: every mutation is expressed as an
//! intent, fed through a pure reducer, and the resulting state is what the
//! view renders.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Plain value representing what the view shows
//! - **Intent**: A store operation expressed as data
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
