use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Opaque session identifier backed by a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One independent conversation thread with its own message history.
/// Volatile per process run; there is no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: SessionId,
    pub name: String,
    pub conversation: Vec<Message>,
    pub created_at: String,
}

impl ChatSession {
    pub fn new(id: SessionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            conversation: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
