use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// App-wide "something changed" notification fired after a successful mutation
pub trait AppRefreshSignal {
    fn notify_updated(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Rc<dyn Fn()>;

/// In-process refresh signal; widgets subscribe to resynchronize themselves
#[derive(Default)]
pub struct RefreshBus {
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl RefreshBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false when the subscriber was not registered
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl AppRefreshSignal for RefreshBus {
    fn notify_updated(&self) {
        // Snapshot so callbacks may (un)subscribe while we iterate
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        log::debug!("Refresh signal fired for {} subscriber(s)", subscribers.len());
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_calls_subscribers_in_order() {
        let bus = RefreshBus::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["accounts", "page", "user"] {
            let calls = calls.clone();
            bus.subscribe(move || calls.borrow_mut().push(name));
        }

        bus.notify_updated();
        assert_eq!(*calls.borrow(), vec!["accounts", "page", "user"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let bus = RefreshBus::new();
        let count = Rc::new(Cell::new(0));

        let id = {
            let count = count.clone();
            bus.subscribe(move || count.set(count.get() + 1))
        };
        bus.notify_updated();
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.notify_updated();

        assert_eq!(count.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_subscribe_during_notify() {
        let bus = Rc::new(RefreshBus::new());
        let inner_bus = bus.clone();
        bus.subscribe(move || {
            inner_bus.subscribe(|| {});
        });

        bus.notify_updated();
        assert_eq!(bus.subscriber_count(), 2);
    }
}
