//! Port traits — the hexagonal architecture boundary.
//!
//! The trait is defined here in `chat-core` (pure Rust).
//! The browser implementation lives in `chat-platform`.
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use chat_types::Result;

/// The external chat endpoint: one prompt in, one reply out.
///
/// The reply body is consumed verbatim as the bot message text — any
/// richer envelope is not part of this contract. Failures map to
/// `ChatError::Transport` (or `ChatError::Timeout` when a request
/// deadline is configured).
#[async_trait(?Send)]
pub trait ChatApiPort {
    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}
