//! Message dispatcher — mediates one request/response exchange with the
//! external chat endpoint.
//!
//! Per session the dispatch state machine is `Idle -> Pending -> Idle`,
//! with no retries and no intermediate states. The user message is
//! appended synchronously before any network activity, so a transcript
//! always shows the prompt even when the exchange fails.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chat_types::config::ChatConfig;
use chat_types::message::Sender;
use chat_types::session::SessionId;
use chat_types::Result;

use crate::event_bus::{EventBus, StoreEvent};
use crate::ports::ChatApiPort;
use crate::store::ConversationStore;

/// Clone-cheap handle; clones share the pending set.
#[derive(Clone)]
pub struct MessageDispatcher {
    pending: Rc<RefCell<HashSet<SessionId>>>,
    surface_transport_errors: bool,
    events: EventBus,
}

impl MessageDispatcher {
    pub fn new(config: &ChatConfig, events: EventBus) -> Self {
        Self {
            pending: Rc::new(RefCell::new(HashSet::new())),
            surface_transport_errors: config.surface_transport_errors,
            events,
        }
    }

    /// Whether a request is in flight for this session. The UI disables
    /// submission while true; `send_prompt` also guards on it.
    pub fn is_pending(&self, session_id: &SessionId) -> bool {
        self.pending.borrow().contains(session_id)
    }

    /// Run one prompt/reply exchange for a session.
    ///
    /// Empty prompts (after trimming) and prompts for a session that is
    /// already pending are silent no-ops. A `SessionNotFound` from a
    /// store append propagates to the caller; failures of
    /// the exchange itself are handled here — logged, pending cleared,
    /// and by default nothing appended to the transcript.
    pub async fn send_prompt(
        &self,
        store: &Rc<RefCell<ConversationStore>>,
        api: &dyn ChatApiPort,
        session_id: &SessionId,
        prompt: &str,
    ) -> Result<()> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Ok(());
        }
        if self.is_pending(session_id) {
            log::warn!(
                "Dispatch ignored: session {} already has a request in flight",
                session_id
            );
            return Ok(());
        }

        store
            .borrow_mut()
            .append_message(session_id, Sender::User, prompt)?;

        self.pending.borrow_mut().insert(session_id.clone());
        self.events.emit(StoreEvent::DispatchStarted {
            session_id: session_id.clone(),
        });

        let outcome = api.send_prompt(prompt).await;

        self.pending.borrow_mut().remove(session_id);

        match outcome {
            Ok(reply) => {
                // The session may have been torn down while the request
                // was in flight; drop the reply rather than crash.
                if store.borrow().contains(session_id) {
                    store
                        .borrow_mut()
                        .append_message(session_id, Sender::Bot, reply)?;
                } else {
                    log::warn!("Reply dropped: session {} no longer exists", session_id);
                }
                self.events.emit(StoreEvent::DispatchFinished {
                    session_id: session_id.clone(),
                });
            }
            Err(e) => {
                log::error!("Chat request failed for session {}: {}", session_id, e);
                if self.surface_transport_errors && store.borrow().contains(session_id) {
                    store.borrow_mut().append_message(
                        session_id,
                        Sender::System,
                        format!("Request failed: {}", e),
                    )?;
                }
                self.events.emit(StoreEvent::DispatchFailed {
                    session_id: session_id.clone(),
                    message: e.to_string(),
                });
            }
        }

        Ok(())
    }
}
