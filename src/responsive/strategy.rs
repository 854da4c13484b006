//! Listener strategies for the two device classes

use super::debounce::Debouncer;
use super::device::DeviceClass;
use super::events::{EventSource, Listener, ListenerId, ViewportEvent};
use crate::core::Logger;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Caller callback, shared between listeners and the immediate call
pub type ResizeCallback = Arc<dyn Fn() + Send + Sync>;

/// One live registration with an event source.
pub struct Subscription {
    source: Arc<dyn EventSource>,
    event: ViewportEvent,
    id: ListenerId,
    debouncer: Option<Arc<Debouncer>>,
}

impl Subscription {
    pub fn event(&self) -> ViewportEvent {
        self.event
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove exactly this registration and stop its debouncer, if any.
    pub fn cancel(&self) {
        self.source.unsubscribe(self.event, self.id);
        if let Some(debouncer) = &self.debouncer {
            debouncer.cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .field("debounced", &self.debouncer.is_some())
            .finish()
    }
}

/// How a device class turns viewport events into callback invocations.
pub trait ResizeStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Register listeners that drive `callback`.
    ///
    /// Streams the source cannot deliver are skipped; the returned list
    /// holds only what was actually registered.
    fn attach(
        &self,
        source: &Arc<dyn EventSource>,
        callback: ResizeCallback,
        logger: &Arc<Logger>,
    ) -> Vec<Subscription>;
}

fn subscribe_or_skip(
    source: &Arc<dyn EventSource>,
    event: ViewportEvent,
    listener: Listener,
    debouncer: Option<Arc<Debouncer>>,
    logger: &Logger,
) -> Option<Subscription> {
    match source.subscribe(event, listener) {
        Ok(id) => Some(Subscription {
            source: Arc::clone(source),
            event,
            id,
            debouncer,
        }),
        Err(e) => {
            logger.debug(format!("skipping {} listener: {}", event, e));
            None
        }
    }
}

/// Pointer devices: debounced listener on the raw resize event.
#[derive(Debug, Clone, Copy)]
pub struct DebouncedResize {
    pub delay: Duration,
}

impl ResizeStrategy for DebouncedResize {
    fn name(&self) -> &'static str {
        "debounced-resize"
    }

    fn attach(
        &self,
        source: &Arc<dyn EventSource>,
        callback: ResizeCallback,
        logger: &Arc<Logger>,
    ) -> Vec<Subscription> {
        let debouncer = match Debouncer::new(self.delay, callback, Arc::clone(logger)) {
            Ok(debouncer) => Arc::new(debouncer),
            Err(e) => {
                logger.error(format!("cannot start resize debouncer: {}", e));
                return Vec::new();
            }
        };

        let trigger = Arc::clone(&debouncer);
        let listener: Listener = Arc::new(move || trigger.trigger());

        subscribe_or_skip(
            source,
            ViewportEvent::Resize,
            listener,
            Some(debouncer),
            logger,
        )
        .into_iter()
        .collect()
    }
}

/// Touch-only devices: orientation and media-query changes, never raw resize.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationAndMedia;

impl ResizeStrategy for OrientationAndMedia {
    fn name(&self) -> &'static str {
        "orientation-and-media"
    }

    fn attach(
        &self,
        source: &Arc<dyn EventSource>,
        callback: ResizeCallback,
        logger: &Arc<Logger>,
    ) -> Vec<Subscription> {
        [ViewportEvent::OrientationChange, ViewportEvent::MediaQueryChange]
            .into_iter()
            .filter_map(|event| {
                let callback = Arc::clone(&callback);
                let listener: Listener = Arc::new(move || callback());
                subscribe_or_skip(source, event, listener, None, logger)
            })
            .collect()
    }
}

impl DeviceClass {
    /// Strategy used for this class
    pub fn strategy(self, debounce: Duration) -> Box<dyn ResizeStrategy> {
        match self {
            DeviceClass::Pointer => Box::new(DebouncedResize { delay: debounce }),
            DeviceClass::TouchOnly => Box::new(OrientationAndMedia),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::MemoryChannel;
    use crate::responsive::ViewportEvents;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn setup() -> (
        Arc<ViewportEvents>,
        Arc<dyn EventSource>,
        Arc<Logger>,
        Arc<MemoryChannel>,
    ) {
        let events = Arc::new(ViewportEvents::new());
        let source: Arc<dyn EventSource> = events.clone();
        let channel = Arc::new(MemoryChannel::new());
        let logger = Arc::new(Logger::with_channel(channel.clone()));
        (events, source, logger, channel)
    }

    #[test]
    fn test_touch_strategy_subscribes_two_streams() {
        let (events, source, logger, _) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let subs = OrientationAndMedia.attach(
            &source,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            &logger,
        );

        let kinds: Vec<ViewportEvent> = subs.iter().map(Subscription::event).collect();
        assert_eq!(
            kinds,
            vec![ViewportEvent::OrientationChange, ViewportEvent::MediaQueryChange]
        );
        assert_eq!(events.listener_count(ViewportEvent::Resize), 0);

        events.emit(ViewportEvent::MediaQueryChange);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        for sub in &subs {
            sub.cancel();
        }
        assert_eq!(events.listener_count(ViewportEvent::OrientationChange), 0);
        assert_eq!(events.listener_count(ViewportEvent::MediaQueryChange), 0);
    }

    #[test]
    fn test_unavailable_stream_is_skipped() {
        let (events, source, logger, channel) = setup();
        events.mark_unavailable(ViewportEvent::MediaQueryChange);

        let subs = OrientationAndMedia.attach(&source, Arc::new(|| {}), &logger);

        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].event(), ViewportEvent::OrientationChange);
        assert!(channel.contains("skipping mediaquerychange listener"));
    }

    #[test]
    fn test_pointer_strategy_subscribes_resize() {
        let (events, source, logger, _) = setup();
        let strategy = DeviceClass::Pointer.strategy(Duration::from_millis(10));
        assert_eq!(strategy.name(), "debounced-resize");

        let subs = strategy.attach(&source, Arc::new(|| {}), &logger);
        assert_eq!(subs.len(), 1);
        assert_eq!(events.listener_count(ViewportEvent::Resize), 1);

        subs[0].cancel();
        assert_eq!(events.listener_count(ViewportEvent::Resize), 0);
    }
}
