//! # Rust Scoped Logger
//!
//! Hierarchically scoped, level-filtered logging plus a device-aware
//! viewport resize coordinator.
//!
//! ## Features
//!
//! - **Scoped loggers**: `scope("db")` derives an independent child whose
//!   prefix nests under its parent's
//! - **Level filtering**: `ERROR < WARN < INFO < DEBUG`, with a master switch
//! - **Pluggable output**: console, JSON lines, or in-memory capture
//! - **Responsive resize**: debounced resize on pointer devices,
//!   orientation and media-query changes on touch-only devices

pub mod channels;
pub mod core;
pub mod macros;
pub mod responsive;

pub mod prelude {
    pub use crate::channels::{ConsoleChannel, JsonChannel, MemoryChannel};
    pub use crate::core::{
        CoreError, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerConfigPatch,
        LoggerMetrics, OutputChannel, Result,
    };
    pub use crate::responsive::{
        responsive_resize, DeviceClass, EventSource, PointerCapability, ResizeHandle,
        ResizeOptions, ResponsiveResize, ViewportEvent, ViewportEvents,
    };
}

pub use crate::channels::{ConsoleChannel, JsonChannel, MemoryChannel};
pub use crate::core::{
    CoreError, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerConfigPatch,
    LoggerMetrics, OutputChannel, Result,
};
pub use crate::responsive::{responsive_resize, ResizeHandle, ResizeOptions, ResponsiveResize};
