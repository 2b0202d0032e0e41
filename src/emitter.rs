// SPDX-License-Identifier: MPL-2.0
//! Generic publish/subscribe registry.
//!
//! An [`Emitter`] maps event names to listeners receiving a borrowed payload
//! of type `A`. Listeners run synchronously, in subscription order, on the
//! caller's stack. A panicking listener is not caught.
//!
//! Components compose an emitter rather than inheriting from one:
//! [`crate::deck::Deck`] owns an `Emitter<SlideChange>` and forwards
//! `on`/`once`/`off`/`emit` to it.

use std::fmt;

/// Handler invoked with the payload of the event it subscribed to.
pub type Handler<A> = Box<dyn FnMut(&A)>;

/// Opaque handle returned by [`Emitter::on`] and [`Emitter::once`], used to
/// unsubscribe. Ids are never reused within one emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<A> {
    id: ListenerId,
    event: String,
    once: bool,
    handler: Handler<A>,
}

pub struct Emitter<A> {
    // Single list keeps subscription order across the whole registry.
    listeners: Vec<Listener<A>>,
    next_id: u64,
}

impl<A> Emitter<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn subscribe(&mut self, event: &str, once: bool, handler: Handler<A>) -> ListenerId {
        let id = self.next_id();
        self.listeners.push(Listener {
            id,
            event: event.to_string(),
            once,
            handler,
        });
        id
    }

    /// Subscribes `handler` to `event`.
    pub fn on<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&A) + 'static,
    {
        self.subscribe(event, false, Box::new(handler))
    }

    /// Subscribes `handler` to the next emission of `event` only.
    pub fn once<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&A) + 'static,
    {
        self.subscribe(event, true, Box::new(handler))
    }

    /// Removes a single listener. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Removes every listener of `event`, returning how many were removed.
    pub fn off_event(&mut self, event: &str) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.event != event);
        before - self.listeners.len()
    }

    /// Removes every listener of every event.
    pub fn off_all(&mut self) {
        self.listeners.clear();
    }

    /// Invokes every listener of `event` with `payload`, in subscription
    /// order, and returns how many ran. `once` listeners are dropped after
    /// running.
    pub fn emit(&mut self, event: &str, payload: &A) -> usize {
        let mut invoked = 0;
        let mut spent = Vec::new();

        for listener in self
            .listeners
            .iter_mut()
            .filter(|listener| listener.event == event)
        {
            (listener.handler)(payload);
            invoked += 1;
            if listener.once {
                spent.push(listener.id);
            }
        }

        if !spent.is_empty() {
            self.listeners.retain(|listener| !spent.contains(&listener.id));
        }
        invoked
    }

    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.event == event)
            .count()
    }

    #[must_use]
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listeners.iter().any(|listener| listener.event == event)
    }
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<&str> = self
            .listeners
            .iter()
            .map(|listener| listener.event.as_str())
            .collect();
        f.debug_struct("Emitter")
            .field("listeners", &events)
            .field("next_id", &self.next_id)
            .finish()
    }
}
