//! Stress tests for concurrent use
//!
//! These tests verify:
//! - Shared loggers and their scopes stay consistent across threads
//! - Reconfiguring while other threads log never loses or corrupts lines
//! - Concurrent attach/clear cycles leave no listener behind

use rust_scoped_logger::channels::MemoryChannel;
use rust_scoped_logger::core::{LogLevel, Logger, LoggerConfigPatch};
use rust_scoped_logger::responsive::{
    DeviceClass, ResizeOptions, ResponsiveResize, ViewportEvent, ViewportEvents,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_concurrent_scoped_logging() {
    let channel = Arc::new(MemoryChannel::new());
    let root = Arc::new(Logger::with_channel(channel.clone()));
    root.configure(LoggerConfigPatch::new().prefix("[S]"));

    let mut handles = vec![];
    for thread_id in 0..8 {
        let root = Arc::clone(&root);
        handles.push(thread::spawn(move || {
            let scoped = root.scope(&format!("t{}", thread_id));
            for i in 0..100 {
                scoped.info(format!("message {}", i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(channel.len(), 800);
    for thread_id in 0..8 {
        let tag = format!("[S]:t{} [INFO]", thread_id);
        let count = channel
            .lines()
            .iter()
            .filter(|line| line.line.starts_with(&tag))
            .count();
        assert_eq!(count, 100, "thread {} lost lines", thread_id);
    }
}

#[test]
fn test_reconfigure_while_logging() {
    let channel = Arc::new(MemoryChannel::new());
    let logger = Arc::new(Logger::with_channel(channel.clone()));

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2000 {
                logger.error(format!("line {}", i));
            }
        })
    };
    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                let level = if i % 2 == 0 { LogLevel::Error } else { LogLevel::Debug };
                logger.configure(LoggerConfigPatch::new().level(level).prefix(format!("[{}]", i % 2)));
            }
        })
    };

    writer.join().expect("writer panicked");
    toggler.join().expect("toggler panicked");

    // Error always passes the threshold, so every line lands
    assert_eq!(channel.len(), 2000);
    assert!(channel
        .lines()
        .iter()
        .all(|l| l.line.starts_with("[0] [ERROR]") || l.line.starts_with("[1] [ERROR]") || l.line.starts_with(" [ERROR]")));
    assert_eq!(logger.metrics().emitted(), 2000);
}

#[test]
fn test_concurrent_attach_and_clear() {
    let events = Arc::new(ViewportEvents::new());
    let logger = Logger::with_channel(Arc::new(MemoryChannel::new()));
    let resize = Arc::new(
        ResponsiveResize::new(events.clone(), DeviceClass::TouchOnly).with_logger(logger),
    );
    let calls = Arc::new(AtomicUsize::new(0));

    let mut handles = vec![];
    for _ in 0..8 {
        let resize = Arc::clone(&resize);
        let calls = Arc::clone(&calls);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let calls = Arc::clone(&calls);
                let handle = resize.responsive_resize_with(
                    move || {
                        calls.fetch_add(1, Ordering::Relaxed);
                    },
                    ResizeOptions::default().immediate_call(false),
                );
                handle.clear();
                handle.clear();
            }
        }));
    }

    let emitter = {
        let events = Arc::clone(&events);
        thread::spawn(move || {
            for _ in 0..200 {
                events.emit(ViewportEvent::OrientationChange);
                thread::sleep(Duration::from_micros(50));
            }
        })
    };

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    emitter.join().expect("emitter panicked");

    assert_eq!(events.listener_count(ViewportEvent::OrientationChange), 0);
    assert_eq!(events.listener_count(ViewportEvent::MediaQueryChange), 0);

    let settled = calls.load(Ordering::Relaxed);
    events.emit(ViewportEvent::OrientationChange);
    assert_eq!(calls.load(Ordering::Relaxed), settled);
}

#[test]
fn test_many_pointer_attachments_clean_up() {
    let events = Arc::new(ViewportEvents::new());
    let logger = Logger::with_channel(Arc::new(MemoryChannel::new()));
    let resize = ResponsiveResize::new(events.clone(), DeviceClass::Pointer)
        .with_debounce(Duration::from_millis(5))
        .with_logger(logger);

    let handles: Vec<_> = (0..32)
        .map(|_| resize.responsive_resize_with(|| {}, ResizeOptions::default().immediate_call(false)))
        .collect();
    assert_eq!(events.listener_count(ViewportEvent::Resize), 32);

    for handle in &handles {
        handle.clear();
    }
    assert_eq!(events.listener_count(ViewportEvent::Resize), 0);
}
