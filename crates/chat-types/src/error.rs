use thiserror::Error;
use crate::session::SessionId;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ChatError {
    /// Whether this error came out of the request/response exchange
    /// (as opposed to a store lookup miss, which is a programming error).
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_) | ChatError::Timeout(_))
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
