//! Reducer for the counter store.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Every intent applies from every state. Arithmetic saturates at the `i64`
/// limits so the transition is total.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let value = match intent {
            CounterIntent::Increment => state.value.saturating_add(1),
            CounterIntent::Decrement => state.value.saturating_sub(1),
            CounterIntent::Set(n) => n,
        };
        CounterState { value }
    }
}
