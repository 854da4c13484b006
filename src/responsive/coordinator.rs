//! Responsive resize coordinator

use super::debounce::DEFAULT_DEBOUNCE;
use super::device::{DeviceClass, PointerCapability};
use super::events::EventSource;
use super::strategy::{ResizeCallback, Subscription};
use crate::core::{Logger, LoggerConfigPatch};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Per-call options for [`ResponsiveResize::responsive_resize_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Run the callback once, synchronously, before returning the handle
    pub immediate_call: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            immediate_call: true,
        }
    }
}

impl ResizeOptions {
    #[must_use = "builder methods return a new value"]
    pub fn immediate_call(mut self, immediate_call: bool) -> Self {
        self.immediate_call = immediate_call;
        self
    }
}

/// Attaches the right viewport listener for the current device.
///
/// Pointer devices get a debounced listener on the raw resize event.
/// Touch-only devices get orientation and media-query listeners instead,
/// since they fire resize while scrolling and animating browser chrome.
/// The device class is read once per attachment and never re-evaluated.
///
/// # Example
///
/// ```
/// use rust_scoped_logger::responsive::{DeviceClass, ResponsiveResize, ViewportEvent, ViewportEvents};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let events = Arc::new(ViewportEvents::new());
/// let resize = ResponsiveResize::new(events.clone(), DeviceClass::TouchOnly);
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = calls.clone();
/// let handle = resize.responsive_resize(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// events.emit(ViewportEvent::OrientationChange);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
///
/// handle.clear();
/// events.emit(ViewportEvent::OrientationChange);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub struct ResponsiveResize {
    source: Arc<dyn EventSource>,
    pointer: Arc<dyn PointerCapability>,
    debounce: Duration,
    logger: Arc<Logger>,
}

impl ResponsiveResize {
    /// Diagnostics are off until a logger is supplied with
    /// [`with_logger`](ResponsiveResize::with_logger).
    pub fn new(source: Arc<dyn EventSource>, pointer: impl PointerCapability + 'static) -> Self {
        let logger = Logger::instance().scope("responsive");
        logger.configure(LoggerConfigPatch::new().enabled(false));

        Self {
            source,
            pointer: Arc::new(pointer),
            debounce: DEFAULT_DEBOUNCE,
            logger: Arc::new(logger),
        }
    }

    /// Settle window for the pointer branch
    #[must_use = "builder methods return a new value"]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Logger for attach/detach diagnostics
    #[must_use = "builder methods return a new value"]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Attach `callback` and call it once right away.
    pub fn responsive_resize<F>(&self, callback: F) -> ResizeHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.responsive_resize_with(callback, ResizeOptions::default())
    }

    /// Attach `callback` with explicit options.
    ///
    /// Panics from the immediate call and from touch-branch events reach the
    /// caller. On the pointer branch the debounce worker logs the panic at
    /// error level and keeps delivering later resizes.
    pub fn responsive_resize_with<F>(&self, callback: F, options: ResizeOptions) -> ResizeHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        let device = DeviceClass::detect(&*self.pointer);
        let strategy = device.strategy(self.debounce);
        let callback: ResizeCallback = Arc::new(callback);

        let subscriptions = strategy.attach(&self.source, Arc::clone(&callback), &self.logger);
        self.logger.debug(format!(
            "attached {} ({} device, {} listeners)",
            strategy.name(),
            device,
            subscriptions.len()
        ));

        if options.immediate_call {
            callback();
        }

        ResizeHandle {
            device,
            subscriptions: Mutex::new(subscriptions),
            cleared: AtomicBool::new(false),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl fmt::Debug for ResponsiveResize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveResize")
            .field("debounce", &self.debounce)
            .field("logger", &self.logger)
            .finish()
    }
}

/// One-shot form of [`ResponsiveResize`] for callers without a long-lived coordinator.
pub fn responsive_resize<F>(
    source: Arc<dyn EventSource>,
    pointer: impl PointerCapability + 'static,
    callback: F,
    immediate_call: bool,
) -> ResizeHandle
where
    F: Fn() + Send + Sync + 'static,
{
    ResponsiveResize::new(source, pointer)
        .responsive_resize_with(callback, ResizeOptions { immediate_call })
}

/// Cleanup handle for one attachment.
///
/// Dropping the handle leaves the listeners in place; only
/// [`clear`](ResizeHandle::clear) removes them.
#[must_use = "listeners stay attached until `clear()` is called"]
pub struct ResizeHandle {
    device: DeviceClass,
    subscriptions: Mutex<Vec<Subscription>>,
    cleared: AtomicBool,
    logger: Arc<Logger>,
}

impl ResizeHandle {
    /// Detach every listener this handle owns. Only the first call acts.
    pub fn clear(&self) {
        if self.cleared.swap(true, Ordering::AcqRel) {
            return;
        }

        let subscriptions = std::mem::take(&mut *self.subscriptions.lock());
        for subscription in &subscriptions {
            subscription.cancel();
        }
        self.logger
            .debug(format!("cleared {} listeners", subscriptions.len()));
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared.load(Ordering::Acquire)
    }

    /// Class detected when this handle was created
    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Number of registrations still held
    pub fn listener_count(&self) -> usize {
        self.subscriptions.lock().len()
    }
}

impl fmt::Debug for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHandle")
            .field("device", &self.device)
            .field("subscriptions", &*self.subscriptions.lock())
            .field("cleared", &self.is_cleared())
            .finish()
    }
}
