//! State for the counter store.

use crate::ui::mvi::UiState;

/// The one piece of domain state: a signed counter, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl UiState for CounterState {}
