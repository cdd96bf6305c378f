//! Named-event listener registry with concurrent emission

use futures::future::{try_join_all, BoxFuture};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::utils::OrderedMap;

type ListenerFn<D> = dyn Fn(String, D) -> BoxFuture<'static, Result<()>> + Send + Sync;

/// Shared handle to an async listener
///
/// Clones point at the same function, which is what
/// [`EventEmitter::remove_listeners`] compares against.
pub struct Listener<D> {
    inner: Arc<ListenerFn<D>>,
}

impl<D> Listener<D> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(String, D) -> BoxFuture<'static, Result<()>> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Whether both handles refer to the same registered function
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn call(&self, event: String, data: D) -> BoxFuture<'static, Result<()>> {
        (self.inner)(event, data)
    }
}

impl<D> Clone for Listener<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> fmt::Debug for Listener<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// One event name or several
pub trait EventNames {
    fn event_names(self) -> Vec<String>;
}

impl EventNames for &str {
    fn event_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl EventNames for String {
    fn event_names(self) -> Vec<String> {
        vec![self]
    }
}

impl EventNames for &[&str] {
    fn event_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<const N: usize> EventNames for [&str; N] {
    fn event_names(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl EventNames for Vec<String> {
    fn event_names(self) -> Vec<String> {
        self
    }
}

/// Registry of listeners keyed by event name
///
/// Every listener of an event receives its own clone of the emitted data.
pub struct EventEmitter<D> {
    events: OrderedMap<String, Vec<Listener<D>>>,
}

impl<D> Default for EventEmitter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for EventEmitter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.events.iter().map(|(event, listeners)| (event, listeners.len())))
            .finish()
    }
}

impl<D> EventEmitter<D> {
    pub const fn new() -> Self {
        Self {
            events: OrderedMap::new(),
        }
    }

    /// Append `listener` to each named event
    pub fn on(&mut self, events: impl EventNames, listener: &Listener<D>) -> &mut Self {
        for event in events.event_names() {
            self.events
                .get_or_insert_with(event, Vec::new)
                .push(listener.clone());
        }
        self
    }

    /// Drop listeners
    ///
    /// With no event everything is cleared. With an event only, that event's
    /// list is emptied. With both, only handles [`Listener::same_as`] the
    /// given one are removed from that event.
    pub fn remove_listeners(&mut self, event: Option<&str>, listener: Option<&Listener<D>>) -> &mut Self {
        match (event, listener) {
            (None, _) => self.events.clear(),
            (Some(event), None) => {
                if let Some(listeners) = self.events.get_mut(event) {
                    listeners.clear();
                }
            }
            (Some(event), Some(target)) => {
                if let Some(listeners) = self.events.get_mut(event) {
                    listeners.retain(|registered| !registered.same_as(target));
                }
            }
        }
        self
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }
}

impl<D: Clone> EventEmitter<D> {
    /// Run every listener of `event` concurrently and wait for all of them
    ///
    /// The first listener error is returned. Emitting an event nobody
    /// listens to does nothing.
    pub async fn emit(&self, event: &str, data: D) -> Result<()> {
        let Some(listeners) = self.events.get(event) else {
            return Ok(());
        };

        debug!(event, listeners = listeners.len(), "emitting event");
        try_join_all(
            listeners
                .iter()
                .map(|listener| listener.call(event.to_string(), data.clone())),
        )
        .await?;
        Ok(())
    }
}
