//! Logger configuration and partial updates

use super::{error::Result, log_level::LogLevel};
use serde::{Deserialize, Serialize};

/// Complete configuration of one logger instance.
///
/// Plain value type: scoping copies it, nothing shares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Master switch
    pub enabled: bool,
    /// Most verbose level still emitted
    pub level: LogLevel,
    /// Tag prepended to every line, may be empty
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Debug,
            prefix: String::new(),
        }
    }
}

impl LoggerConfig {
    /// Shallow merge: only fields present in `patch` are overwritten.
    pub fn merge(&mut self, patch: LoggerConfigPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
    }

    /// Copy of this config for a child scope named `name`.
    #[must_use]
    pub fn scoped(&self, name: &str) -> LoggerConfig {
        LoggerConfig {
            enabled: self.enabled,
            level: self.level,
            prefix: format!("{}:{}", self.prefix, name),
        }
    }

    /// Whether a message at `level` passes both the switch and the threshold.
    #[inline]
    pub fn permits(&self, level: LogLevel) -> bool {
        self.enabled && self.level.allows(level)
    }

    /// Render `"{prefix} [{LEVEL}] {message}"`.
    ///
    /// An empty prefix still leaves the separating space in front.
    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!("{} [{}] {}", self.prefix, level.to_str(), message)
    }
}

/// Partial configuration accepted by [`Logger::configure`](super::Logger::configure).
///
/// # Example
///
/// ```
/// use rust_scoped_logger::{LogLevel, LoggerConfig, LoggerConfigPatch};
///
/// let mut config = LoggerConfig::default();
/// config.merge(LoggerConfigPatch::new().prefix("[APP]"));
/// config.merge(LoggerConfigPatch::new().level(LogLevel::Error));
///
/// assert_eq!(config.prefix, "[APP]");
/// assert_eq!(config.level, LogLevel::Error);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl LoggerConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Parse a patch from JSON such as `{"level": "WARN"}`.
    ///
    /// Keys that are absent stay untouched when the patch is merged.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.level.is_none() && self.prefix.is_none()
    }
}

impl From<LoggerConfig> for LoggerConfigPatch {
    fn from(config: LoggerConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            level: Some(config.level),
            prefix: Some(config.prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn test_merge_keeps_missing_fields() {
        let mut config = LoggerConfig::default();
        config.merge(LoggerConfigPatch::new().prefix("[P]"));
        config.merge(LoggerConfigPatch::new().level(LogLevel::Error));

        assert_eq!(config.prefix, "[P]");
        assert_eq!(config.level, LogLevel::Error);
        assert!(config.enabled);

        config.merge(LoggerConfigPatch::new());
        assert_eq!(config.prefix, "[P]");
    }

    #[test]
    fn test_scoped_prefix() {
        let mut config = LoggerConfig::default();
        config.prefix = "[TEST]".into();

        let child = config.scoped("A").scoped("B");
        assert_eq!(child.prefix, "[TEST]:A:B");
        assert_eq!(config.prefix, "[TEST]");
    }

    #[test]
    fn test_format_line() {
        let mut config = LoggerConfig::default();
        assert_eq!(config.format_line(LogLevel::Info, "x"), " [INFO] x");

        config.prefix = "[P]".into();
        assert_eq!(config.format_line(LogLevel::Warn, "hi"), "[P] [WARN] hi");
    }

    #[test]
    fn test_patch_from_json() {
        let patch = LoggerConfigPatch::from_json(r#"{"level": "warn"}"#).unwrap();
        assert_eq!(patch.level, Some(LogLevel::Warn));

        let patch = LoggerConfigPatch::from_json(r#"{"level": "verbose"}"#);
        assert!(matches!(patch, Err(CoreError::Config(_))));

        let patch = LoggerConfigPatch::from_json(r#"{"level": "WARN", "prefix": "[X]"}"#).unwrap();
        assert_eq!(patch.level, Some(LogLevel::Warn));
        assert_eq!(patch.prefix.as_deref(), Some("[X]"));
        assert_eq!(patch.enabled, None);

        assert!(LoggerConfigPatch::from_json("{}").unwrap().is_empty());
    }
}
