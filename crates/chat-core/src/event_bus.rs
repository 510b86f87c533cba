//! Simple event bus for decoupled communication between the
//! conversation core and the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior
//! mutability via RefCell. Events are buffered and drained by the UI
//! on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chat_types::message::MessageId;
use chat_types::session::SessionId;

/// Events emitted by the conversation store and dispatcher.
/// UI drains these for reactive re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new session was inserted into the store
    SessionCreated { session_id: SessionId },

    /// A message was appended to a session's transcript
    MessageAppended {
        session_id: SessionId,
        message_id: MessageId,
    },

    /// A prompt was handed to the chat endpoint; the session is pending
    DispatchStarted { session_id: SessionId },

    /// The reply arrived and was recorded
    DispatchFinished { session_id: SessionId },

    /// The exchange failed; pending state was cleared
    DispatchFailed {
        session_id: SessionId,
        message: String,
    },
}

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<StoreEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the store and the dispatcher.
    pub fn emit(&self, event: StoreEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
