//! Device-aware viewport change coordination
//!
//! [`ResponsiveResize`] picks the listener strategy for the current device
//! class and hands back a [`ResizeHandle`] whose `clear()` detaches
//! everything it attached. Hosts provide the event streams through
//! [`EventSource`] and the pointer query through [`PointerCapability`].

pub mod coordinator;
pub mod debounce;
pub mod device;
pub mod events;
pub mod strategy;

pub use coordinator::{responsive_resize, ResizeHandle, ResizeOptions, ResponsiveResize};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use device::{DeviceClass, PointerCapability};
pub use events::{EventSource, Listener, ListenerId, ViewportEvent, ViewportEvents};
pub use strategy::{
    DebouncedResize, OrientationAndMedia, ResizeCallback, ResizeStrategy, Subscription,
};
