//! Trailing-edge debounce on a worker thread

use crate::core::logger::panic_message;
use crate::core::{Logger, Result};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Settle window used when none is configured
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

enum Signal {
    Trigger,
    Cancel,
}

/// Collapses bursts of triggers into one trailing callback.
///
/// The callback runs on the worker thread once `delay` has passed without
/// another [`trigger`](Debouncer::trigger). After [`cancel`](Debouncer::cancel)
/// (or drop) pending and future triggers are discarded. A panic in the
/// callback costs only that call: it is reported through `logger` and the
/// worker keeps serving later bursts.
pub struct Debouncer {
    sender: Sender<Signal>,
    cancelled: Arc<AtomicBool>,
    delay: Duration,
    logger: Arc<Logger>,
}

impl Debouncer {
    pub fn new(
        delay: Duration,
        callback: Arc<dyn Fn() + Send + Sync>,
        logger: Arc<Logger>,
    ) -> Result<Self> {
        let (sender, receiver) = unbounded();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);
        let worker_logger = Arc::clone(&logger);

        thread::Builder::new()
            .name("responsive-debounce".into())
            .spawn(move || Self::run(receiver, delay, worker_cancelled, callback, worker_logger))?;

        Ok(Self {
            sender,
            cancelled,
            delay,
            logger,
        })
    }

    fn run(
        receiver: Receiver<Signal>,
        delay: Duration,
        cancelled: Arc<AtomicBool>,
        callback: Arc<dyn Fn() + Send + Sync>,
        logger: Arc<Logger>,
    ) {
        loop {
            // Idle until the first trigger of a burst
            match receiver.recv() {
                Ok(Signal::Trigger) => {}
                Ok(Signal::Cancel) | Err(_) => return,
            }

            // Every further trigger restarts the window
            loop {
                match receiver.recv_timeout(delay) {
                    Ok(Signal::Trigger) => continue,
                    Ok(Signal::Cancel) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => break,
                }
            }

            if cancelled.load(Ordering::Acquire) {
                return;
            }

            // The panic hook has already reported it; keep serving later bursts
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback()));
            if let Err(panic_info) = result {
                logger.error(format!(
                    "resize callback panicked: {}",
                    panic_message(panic_info.as_ref())
                ));
            }
        }
    }

    /// Start or restart the settle window
    pub fn trigger(&self) {
        if self.cancelled.load(Ordering::Acquire) {
            return;
        }
        if self.sender.send(Signal::Trigger).is_err() {
            self.logger
                .debug("debounce worker has stopped, resize trigger dropped");
        }
    }

    /// Drop any pending call and stop the worker. Safe to repeat.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        let _ = self.sender.send(Signal::Cancel);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
