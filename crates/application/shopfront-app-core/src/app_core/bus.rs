use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use tracing::error;

use super::events::{ShopEvent, Topic};

type Handler = Arc<dyn Fn(&ShopEvent) + Send + Sync + 'static>;

/// Handle returned by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] to stop delivery.
#[derive(Debug)]
pub struct Subscription {
    topic: Topic,
    id: u64,
}

/// Synchronous publish/subscribe dispatcher: a map from topic to an ordered
/// handler list. Cloning shares the same registry.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: HashMap<Topic, Vec<(u64, Handler)>>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner::default())),
        }
    }

    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&ShopEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner
            .handlers
            .entry(topic)
            .or_default()
            .push((id, Arc::new(handler)));
        Subscription { topic, id }
    }

    /// True when the handler was still registered.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.handlers.get_mut(&subscription.topic) {
            Some(list) => {
                let before = list.len();
                list.retain(|(id, _)| *id != subscription.id);
                list.len() != before
            }
            None => false,
        }
    }

    /// Invokes every handler registered for the event's topic, in
    /// registration order. The list is snapshotted before dispatch, so a
    /// handler may publish or subscribe re-entrantly. A panicking handler is
    /// logged and does not starve the handlers after it.
    pub fn publish(&self, event: ShopEvent) {
        let snapshot: Vec<Handler> = {
            let inner = self.inner.lock().unwrap();
            inner
                .handlers
                .get(&event.topic())
                .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
                .unwrap_or_default()
        };

        for handler in snapshot {
            if catch_unwind(AssertUnwindSafe(|| handler(&event))).is_err() {
                error!(topic = ?event.topic(), "event handler panicked, continuing dispatch");
            }
        }
    }
}
