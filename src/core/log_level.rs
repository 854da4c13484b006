//! Log level definitions

use super::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity of a log line. Higher ordinals are more verbose.
///
/// A logger configured at level `L` emits a message at level `M` iff
/// `M <= L` under `Error < Warn < Info < Debug`.
///
/// Serialized as the uppercase name. Deserialization goes through
/// [`FromStr`], so config files accept the same spellings as `parse`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    #[default]
    Debug = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Whether a logger configured at `self` lets a `message` level through.
    #[inline]
    pub fn allows(self, message: LogLevel) -> bool {
        message as u8 <= self as u8
    }

    /// Permissive conversion from a raw ordinal.
    ///
    /// Ordinals past `Debug` saturate to `Debug`, so a bogus threshold
    /// lets everything through instead of failing.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(CoreError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        s.parse()
    }
}
