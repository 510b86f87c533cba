//! UI-level state that drives rendering.
//! A projection over the conversation store, updated each frame by
//! draining the EventBus.

use std::collections::HashSet;

use chat_core::event_bus::StoreEvent;
use chat_types::session::SessionId;

/// State visible to UI panels
pub struct UiState {
    /// Active session pointer. May reference a removed or unknown id;
    /// the view degrades to the no-chat display in that case.
    pub active_session: Option<SessionId>,
    /// Whether the sidebar is hidden
    pub sidebar_collapsed: bool,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// When false (the default), a failed exchange resets the status
    /// line to "Ready" and the failure goes only to the operator log.
    pub surface_failures: bool,
    /// Sessions with a request in flight
    pending: HashSet<SessionId>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_session: None,
            sidebar_collapsed: false,
            input_text: String::new(),
            status_text: "Ready".to_string(),
            surface_failures: false,
            pending: HashSet::new(),
        }
    }

    /// Set the active session pointer. No existence check is performed;
    /// an unknown id simply renders the no-chat view.
    pub fn select_active(&mut self, session_id: SessionId) {
        self.active_session = Some(session_id);
    }

    pub fn is_pending(&self, session_id: &SessionId) -> bool {
        self.pending.contains(session_id)
    }

    /// Whether the active session has a request in flight (used to
    /// disable submission and show the loading indicator).
    pub fn active_is_pending(&self) -> bool {
        self.active_session
            .as_ref()
            .map(|id| self.pending.contains(id))
            .unwrap_or(false)
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<StoreEvent>) {
        for event in events {
            match event {
                StoreEvent::SessionCreated { .. } | StoreEvent::MessageAppended { .. } => {
                    // Transcript and session list re-derive from the
                    // store on every frame; nothing to track here.
                }
                StoreEvent::DispatchStarted { session_id } => {
                    self.pending.insert(session_id);
                    self.status_text = "Waiting for reply...".to_string();
                }
                StoreEvent::DispatchFinished { session_id } => {
                    self.pending.remove(&session_id);
                    self.status_text = "Ready".to_string();
                }
                StoreEvent::DispatchFailed {
                    session_id,
                    message,
                } => {
                    self.pending.remove(&session_id);
                    self.status_text = if self.surface_failures {
                        format!("Request failed: {}", message)
                    } else {
                        "Ready".to_string()
                    };
                    log::warn!("Dispatch failed for session {}: {}", session_id, message);
                }
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
