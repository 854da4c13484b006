//! Device class detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Answers "does this device expose a precise pointer, such as a mouse".
///
/// Any `Fn() -> bool` closure qualifies, which is how hosts usually wire
/// in their platform query.
pub trait PointerCapability: Send + Sync {
    fn has_fine_pointer(&self) -> bool;
}

impl<F> PointerCapability for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn has_fine_pointer(&self) -> bool {
        self()
    }
}

/// Input class of the current device, as seen at attachment time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Has a fine pointer; the raw resize event is trustworthy
    Pointer,
    /// Touch only; resize fires spuriously while scrolling
    TouchOnly,
}

impl DeviceClass {
    pub fn detect(pointer: &dyn PointerCapability) -> Self {
        if pointer.has_fine_pointer() {
            DeviceClass::Pointer
        } else {
            DeviceClass::TouchOnly
        }
    }
}

/// A fixed class doubles as its own predicate.
impl PointerCapability for DeviceClass {
    fn has_fine_pointer(&self) -> bool {
        matches!(self, DeviceClass::Pointer)
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Pointer => f.write_str("pointer"),
            DeviceClass::TouchOnly => f.write_str("touch-only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_detect_from_closure() {
        assert_eq!(DeviceClass::detect(&|| true), DeviceClass::Pointer);
        assert_eq!(DeviceClass::detect(&|| false), DeviceClass::TouchOnly);
    }

    #[test]
    fn test_detect_queries_once() {
        let calls = AtomicUsize::new(0);
        let predicate = || {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        DeviceClass::detect(&predicate);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_class_as_predicate() {
        assert!(DeviceClass::Pointer.has_fine_pointer());
        assert!(!DeviceClass::TouchOnly.has_fine_pointer());
        assert_eq!(DeviceClass::TouchOnly.to_string(), "touch-only");
    }
}
