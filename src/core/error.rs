//! Error types for the logger and the resize coordinator

use crate::responsive::ViewportEvent;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Unknown log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An output channel rejected a line
    #[error("Output channel '{channel}' failed: {message}")]
    ChannelWrite { channel: String, message: String },

    /// The host does not provide the requested event stream
    #[error("Event source unavailable: {event}")]
    EventUnavailable { event: ViewportEvent },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create a channel write error
    pub fn channel_write(channel: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::ChannelWrite {
            channel: channel.into(),
            message: message.into(),
        }
    }

    /// Create an unavailable event source error
    pub fn unavailable(event: ViewportEvent) -> Self {
        CoreError::EventUnavailable { event }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CoreError::Other(msg.into())
    }
}
