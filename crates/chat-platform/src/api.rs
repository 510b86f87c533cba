//! HTTP adapter for the external chat endpoint.
//!
//! Speaks the backend's wire format: `POST {api_base}/api/chat` with a
//! JSON body `{ "prompt": string }`; a 2xx response body is the
//! assistant's reply, consumed verbatim. Uses browser `fetch()` via
//! gloo-net for WASM compatibility.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::json;

use chat_core::ports::ChatApiPort;
use chat_types::config::ChatConfig;
use chat_types::{ChatError, Result};

pub struct HttpChatApi {
    config: ChatConfig,
}

impl HttpChatApi {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    async fn post_prompt(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.config.api_base);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&json!({ "prompt": prompt }))
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;

        if !response.ok() {
            return Err(ChatError::Transport(format!("HTTP {}", response.status())));
        }

        response.text().await.map_err(request_error)
    }
}

/// Keep body-encoding failures distinct from network ones.
fn request_error(e: gloo_net::Error) -> ChatError {
    match e {
        gloo_net::Error::SerdeError(e) => e.into(),
        other => ChatError::Transport(other.to_string()),
    }
}

#[async_trait(?Send)]
impl ChatApiPort for HttpChatApi {
    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        match self.config.request_timeout_ms {
            Some(ms) => {
                let request = Box::pin(self.post_prompt(prompt));
                let timeout = Box::pin(TimeoutFuture::new(ms as u32));
                match future::select(request, timeout).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(ChatError::Timeout(ms)),
                }
            }
            None => self.post_prompt(prompt).await,
        }
    }
}
