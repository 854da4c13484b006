//! Responsive resize example
//!
//! Feeds simulated viewport events into the coordinator for both device
//! classes.
//!
//! Run with: cargo run --example responsive_resize

use rust_scoped_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Rust Scoped Logger - Responsive Resize Example ===\n");

    let log = Arc::new(Logger::instance().scope("demo"));
    let events = Arc::new(ViewportEvents::new());

    println!("1. Pointer device: resize bursts are debounced");
    let pointer = ResponsiveResize::new(events.clone(), DeviceClass::Pointer)
        .with_debounce(Duration::from_millis(100));
    let handle = {
        let log = Arc::clone(&log);
        pointer.responsive_resize(move || log.info("layout recalculated (pointer)"))
    };
    for _ in 0..10 {
        events.emit(ViewportEvent::Resize);
    }
    thread::sleep(Duration::from_millis(300));
    handle.clear();

    println!("\n2. Touch-only device: orientation and media queries");
    let touch = ResponsiveResize::new(events.clone(), DeviceClass::TouchOnly);
    let handle = {
        let log = Arc::clone(&log);
        touch.responsive_resize_with(
            move || log.info("layout recalculated (touch)"),
            ResizeOptions::default().immediate_call(false),
        )
    };
    events.emit(ViewportEvent::Resize);
    events.emit(ViewportEvent::OrientationChange);
    events.emit(ViewportEvent::MediaQueryChange);
    handle.clear();
    handle.clear();

    println!("\n=== Example completed successfully! ===");
}
