//! Viewport event sources
//!
//! The coordinator only needs subscribe/unsubscribe pairs for three
//! streams. [`ViewportEvents`] is an in-process implementation that the
//! host feeds from its windowing layer.

use crate::core::{CoreError, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Viewport change streams a host can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportEvent {
    /// Window size changed
    Resize,
    /// Device rotated
    OrientationChange,
    /// A watched media query flipped its match state
    MediaQueryChange,
}

impl ViewportEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportEvent::Resize => "resize",
            ViewportEvent::OrientationChange => "orientationchange",
            ViewportEvent::MediaQueryChange => "mediaquerychange",
        }
    }
}

impl fmt::Display for ViewportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback registered with an [`EventSource`]
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Registration token returned by [`EventSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Subscribe/unsubscribe access to viewport event streams.
pub trait EventSource: Send + Sync {
    /// Register `listener` for `event`.
    ///
    /// Fails with [`CoreError::EventUnavailable`] when the host cannot
    /// deliver that stream.
    fn subscribe(&self, event: ViewportEvent, listener: Listener) -> Result<ListenerId>;

    /// Remove a registration. Returns false when `id` was not registered.
    fn unsubscribe(&self, event: ViewportEvent, id: ListenerId) -> bool;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<ViewportEvent, Vec<(ListenerId, Listener)>>,
    unavailable: HashSet<ViewportEvent>,
}

impl Registry {
    fn is_registered(&self, event: ViewportEvent, id: ListenerId) -> bool {
        self.listeners
            .get(&event)
            .is_some_and(|list| list.iter().any(|(lid, _)| *lid == id))
    }
}

/// In-process event hub.
///
/// The host calls [`ViewportEvents::emit`] whenever its platform reports a
/// change; registered listeners run on the emitting thread.
///
/// # Example
///
/// ```
/// use rust_scoped_logger::responsive::{EventSource, ViewportEvent, ViewportEvents};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let events = ViewportEvents::new();
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = hits.clone();
///
/// let id = events
///     .subscribe(ViewportEvent::OrientationChange, Arc::new(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     }))
///     .unwrap();
///
/// events.emit(ViewportEvent::OrientationChange);
/// events.unsubscribe(ViewportEvent::OrientationChange, id);
/// events.emit(ViewportEvent::OrientationChange);
///
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct ViewportEvents {
    registry: Mutex<Registry>,
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model a host that lacks `event`; later subscriptions to it fail.
    pub fn mark_unavailable(&self, event: ViewportEvent) {
        self.registry.lock().unavailable.insert(event);
    }

    pub fn mark_available(&self, event: ViewportEvent) {
        self.registry.lock().unavailable.remove(&event);
    }

    pub fn is_available(&self, event: ViewportEvent) -> bool {
        !self.registry.lock().unavailable.contains(&event)
    }

    pub fn listener_count(&self, event: ViewportEvent) -> usize {
        self.registry
            .lock()
            .listeners
            .get(&event)
            .map_or(0, Vec::len)
    }

    /// Run every listener registered for `event`, returning how many ran.
    ///
    /// The lock is released before any listener runs, so a listener may
    /// subscribe or unsubscribe. A listener removed by an earlier one in
    /// the same dispatch is skipped.
    pub fn emit(&self, event: ViewportEvent) -> usize {
        let snapshot: Vec<(ListenerId, Listener)> = self
            .registry
            .lock()
            .listeners
            .get(&event)
            .cloned()
            .unwrap_or_default();

        let mut invoked = 0;
        for (id, listener) in snapshot {
            if !self.registry.lock().is_registered(event, id) {
                continue;
            }
            listener();
            invoked += 1;
        }
        invoked
    }
}

impl EventSource for ViewportEvents {
    fn subscribe(&self, event: ViewportEvent, listener: Listener) -> Result<ListenerId> {
        let mut registry = self.registry.lock();
        if registry.unavailable.contains(&event) {
            return Err(CoreError::unavailable(event));
        }

        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry
            .listeners
            .entry(event)
            .or_default()
            .push((id, listener));
        Ok(id)
    }

    fn unsubscribe(&self, event: ViewportEvent, id: ListenerId) -> bool {
        let mut registry = self.registry.lock();
        let Some(list) = registry.listeners.get_mut(&event) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        before != list.len()
    }
}

impl fmt::Debug for ViewportEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        let counts: HashMap<ViewportEvent, usize> = registry
            .listeners
            .iter()
            .map(|(event, list)| (*event, list.len()))
            .collect();
        f.debug_struct("ViewportEvents")
            .field("listeners", &counts)
            .field("unavailable", &registry.unavailable)
            .finish()
    }
}
