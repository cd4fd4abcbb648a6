//! Counter store: owns the counter value and mediates all reads and writes.
//!
//! The store is an ordinary value. Whoever needs it receives it by reference;
//! there is no process-wide instance.

use std::fmt;

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::reducer::CounterReducer;
use super::state::CounterState;

/// Handle returned by [`CounterStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(i64)>;

pub struct CounterStore {
    state: CounterState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            state: CounterState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn set_value(&mut self, value: i64) {
        self.dispatch(CounterIntent::Set(value));
    }

    pub fn get_value(&self) -> i64 {
        self.state.value
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Run `intent` through the reducer, then notify every subscriber.
    ///
    /// Subscribers are notified after each dispatch, even when the value did
    /// not change (e.g. setting the current value again).
    pub fn dispatch(&mut self, intent: CounterIntent) {
        let previous = self.state.value;
        self.state = CounterReducer::reduce(std::mem::take(&mut self.state), intent);
        tracing::trace!(?intent, previous, value = self.state.value, "counter updated");
        self.notify();
    }

    /// Register a callback invoked with the new value after each mutation.
    ///
    /// Callbacks run synchronously, in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(i64) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let value = self.state.value;
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_zero_without_subscribers() {
        let store = CounterStore::new();
        assert_eq!(store.get_value(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut store = CounterStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        store.subscribe(move |v| first.borrow_mut().push(("first", v)));
        let second = Rc::clone(&log);
        store.subscribe(move |v| second.borrow_mut().push(("second", v)));

        store.increment();
        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn unsubscribe_unknown_id_returns_false() {
        let mut store = CounterStore::new();
        let id = store.subscribe(|_| {});
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn debug_reports_subscriber_count() {
        let mut store = CounterStore::new();
        store.subscribe(|_| {});
        let rendered = format!("{store:?}");
        assert!(rendered.contains("subscribers: 1"));
    }
}
