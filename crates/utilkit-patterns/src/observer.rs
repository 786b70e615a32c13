//! # Observer Registry

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

type Callback = Box<dyn FnMut()>;

/// Keyed registry of callbacks.
///
/// ```
/// use utilkit_patterns::Observer;
///
/// #[derive(PartialEq, Eq, Hash)]
/// enum GameEvent {
///     PlayerDied,
///     LevelUp,
/// }
///
/// let mut observer = Observer::new();
/// observer.subscribe(GameEvent::PlayerDied, || println!("Game over"));
/// assert_eq!(observer.notify(&GameEvent::PlayerDied), 1);
/// assert_eq!(observer.notify(&GameEvent::LevelUp), 0);
/// ```
pub struct Observer<E> {
    subscribers: HashMap<E, Vec<Callback>>,
}

impl<E: Eq + Hash> Observer<E> {
    /// Create a registry with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Append `callback` to the subscribers of `event`.
    pub fn subscribe<F>(&mut self, event: E, callback: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.subscribers
            .entry(event)
            .or_default()
            .push(Box::new(callback));
        self
    }

    /// Run every callback subscribed to `event`, oldest first.
    ///
    /// Returns how many callbacks ran. Notifying an event nobody subscribed
    /// to is not an error.
    pub fn notify(&mut self, event: &E) -> usize {
        let Some(callbacks) = self.subscribers.get_mut(event) else {
            return 0;
        };
        for callback in callbacks.iter_mut() {
            callback();
        }
        tracing::trace!(callbacks = callbacks.len(), "event notified");
        callbacks.len()
    }

    /// Number of callbacks subscribed to `event`.
    pub fn subscriber_count(&self, event: &E) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }
}

impl<E: Eq + Hash> Default for Observer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("events", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq, Eq, Hash)]
    enum Event {
        Connected,
        Disconnected,
    }

    #[test]
    fn test_notify_runs_callbacks_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observer = Observer::new();
        for name in ["first", "second", "third"] {
            let sink = Rc::clone(&log);
            observer.subscribe(Event::Connected, move || sink.borrow_mut().push(name));
        }

        assert_eq!(observer.notify(&Event::Connected), 3);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_notify_only_reaches_matching_event() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observer = Observer::new();
        let on_connect = Rc::clone(&log);
        let on_disconnect = Rc::clone(&log);
        observer
            .subscribe(Event::Connected, move || on_connect.borrow_mut().push("up"))
            .subscribe(Event::Disconnected, move || {
                on_disconnect.borrow_mut().push("down")
            });

        observer.notify(&Event::Disconnected);
        assert_eq!(*log.borrow(), vec!["down"]);
    }

    #[test]
    fn test_notify_without_subscribers() {
        let mut observer: Observer<Event> = Observer::new();
        assert_eq!(observer.notify(&Event::Connected), 0);
        assert_eq!(observer.subscriber_count(&Event::Connected), 0);
    }

    #[test]
    fn test_callbacks_run_on_every_notify() {
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let mut observer = Observer::new();
        observer.subscribe("tick", move || *counter.borrow_mut() += 1);

        observer.notify(&"tick");
        observer.notify(&"tick");
        assert_eq!(*hits.borrow(), 2);
        assert_eq!(observer.subscriber_count(&"tick"), 1);
    }
}
