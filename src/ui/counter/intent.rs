//! Intents for the counter store.

use crate::ui::mvi::Intent;

/// Operations that can be dispatched to the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Value becomes `value + 1`.
    Increment,

    /// Value becomes `value - 1`.
    Decrement,

    /// Value becomes exactly `n`, discarding the prior value.
    Set(i64),
}

impl Intent for CounterIntent {}
