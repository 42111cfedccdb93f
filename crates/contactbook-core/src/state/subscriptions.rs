use tracing::debug;

use super::events::Event;
use super::snapshot::StateSnapshot;

/// Callback invoked after every committed mutation.
pub type Listener = Box<dyn FnMut(&StateSnapshot, &[Event])>;

/// Handle returned by `subscribe`, used to release the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer list with synchronous notify-after-commit semantics.
///
/// Listeners run in registration order on the dispatching thread.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(
            event = "core.state.subscriber_added",
            subscription = id.0,
            subscriber_count = self.listeners.len()
        );
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        let removed = self.listeners.len() != before;
        debug!(
            event = "core.state.subscriber_removed",
            subscription = id.0,
            removed = removed
        );
        removed
    }

    pub fn notify(&mut self, snapshot: &StateSnapshot, events: &[Event]) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(snapshot, events);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.listeners.len()
    }
}
