use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Client configuration. All state is volatile per process run;
/// this only shapes how the chat endpoint is reached and how
/// dispatch failures are presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the chat backend; prompts go to `{api_base}/api/chat`.
    pub api_base: String,
    /// When set, an in-flight request expires after this many
    /// milliseconds and is handled like a transport failure.
    pub request_timeout_ms: Option<u64>,
    /// When true, a transport failure appends a `system` message to the
    /// transcript instead of only being logged.
    pub surface_transport_errors: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: None,
            surface_transport_errors: false,
        }
    }
}
