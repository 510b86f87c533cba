//! In-memory conversation store.
//!
//! Owns every session and transcript for the lifetime of the page.
//! Mutation happens only through `create_session` and `append_message`;
//! each mutation notifies observers through the event bus so the UI can
//! re-render.

use std::collections::HashMap;

use chat_types::message::{Message, MessageId, Sender};
use chat_types::session::{ChatSession, SessionId};
use chat_types::{ChatError, Result};

use crate::event_bus::{EventBus, StoreEvent};

pub struct ConversationStore {
    sessions: HashMap<SessionId, ChatSession>,
    /// Creation order, for sidebar listing
    order: Vec<SessionId>,
    events: EventBus,
}

impl ConversationStore {
    pub fn new(events: EventBus) -> Self {
        Self {
            sessions: HashMap::new(),
            order: Vec::new(),
            events,
        }
    }

    /// Insert a new empty session and return its id.
    pub fn create_session(&mut self, name: impl Into<String>) -> SessionId {
        let id = SessionId::new();
        let session = ChatSession::new(id.clone(), name);
        self.sessions.insert(id.clone(), session);
        self.order.push(id.clone());
        self.events.emit(StoreEvent::SessionCreated {
            session_id: id.clone(),
        });
        log::debug!("Session created: {}", id);
        id
    }

    /// Append a message to a session's transcript.
    ///
    /// Fails with `SessionNotFound` if the id is absent, leaving the
    /// store unchanged.
    pub fn append_message(
        &mut self,
        session_id: &SessionId,
        sender: Sender,
        text: impl Into<String>,
    ) -> Result<MessageId> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| ChatError::SessionNotFound(session_id.clone()))?;

        let message = match sender {
            Sender::User => Message::user(text),
            Sender::Bot => Message::bot(text),
            Sender::System => Message::system(text),
        };
        let message_id = message.id.clone();
        session.conversation.push(message);

        self.events.emit(StoreEvent::MessageAppended {
            session_id: session_id.clone(),
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }

    pub fn get_session(&self, session_id: &SessionId) -> Option<&ChatSession> {
        self.sessions.get(session_id)
    }

    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// All sessions in creation order.
    pub fn list_sessions(&self) -> Vec<&ChatSession> {
        self.order
            .iter()
            .filter_map(|id| self.sessions.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
