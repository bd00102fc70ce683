//! Failure taxonomy for the client detail load.
//!
//! The user only ever sees the configured error message; the variants exist
//! for the diagnostic log.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network unreachable, aborted or timed out at the transport layer.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {status}")]
    Server { status: u16 },

    /// The body could not be read or decoded as a detail record.
    #[error("malformed response body: {0}")]
    Parse(String),
}

impl LoadError {
    /// Short code used in log lines, in the style of `NETWORK_ERROR` / `HTTP_500`.
    pub fn code(&self) -> String {
        match self {
            LoadError::Transport(_) => "NETWORK_ERROR".to_string(),
            LoadError::Server { status } => format!("HTTP_{}", status),
            LoadError::Parse(_) => "PARSE_ERROR".to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, LoadError::Server { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }
}
