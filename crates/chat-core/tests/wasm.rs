//! WASM-target tests for chat-core.
//!
//! Runs EventBus, ConversationStore, and MessageDispatcher tests
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::dispatcher::MessageDispatcher;
use chat_core::event_bus::{EventBus, StoreEvent};
use chat_core::ports::ChatApiPort;
use chat_core::store::ConversationStore;
use chat_types::config::ChatConfig;
use chat_types::message::Sender;
use chat_types::session::SessionId;
use chat_types::ChatError;

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    let id = SessionId::new();
    bus.emit(StoreEvent::SessionCreated {
        session_id: id.clone(),
    });
    bus.emit(StoreEvent::DispatchStarted { session_id: id });

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn event_bus_clone_shares_state() {
    let bus1 = EventBus::new();
    let bus2 = bus1.clone();

    bus1.emit(StoreEvent::SessionCreated {
        session_id: SessionId::new(),
    });
    assert!(bus2.has_pending());
    assert_eq!(bus2.drain().len(), 1);
}

// ─── ConversationStore Tests ─────────────────────────────

#[wasm_bindgen_test]
fn store_create_sessions_in_order() {
    let mut store = ConversationStore::new(EventBus::new());
    let a = store.create_session("Chat 1");
    let b = store.create_session("Chat 2");
    assert_ne!(a, b);

    let listed: Vec<SessionId> = store
        .list_sessions()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(listed, vec![a, b]);
}

#[wasm_bindgen_test]
fn store_append_unknown_session_fails() {
    let mut store = ConversationStore::new(EventBus::new());
    store.create_session("Chat 1");

    let result = store.append_message(&SessionId::new(), Sender::User, "hello");
    assert!(matches!(result, Err(ChatError::SessionNotFound(_))));
    assert_eq!(store.len(), 1);
}

// ─── Mock Chat APIs ──────────────────────────────────────

struct MockApi {
    reply: String,
}

#[async_trait(?Send)]
impl ChatApiPort for MockApi {
    async fn send_prompt(&self, _prompt: &str) -> chat_types::Result<String> {
        Ok(self.reply.clone())
    }
}

struct FailingApi;

#[async_trait(?Send)]
impl ChatApiPort for FailingApi {
    async fn send_prompt(&self, _prompt: &str) -> chat_types::Result<String> {
        Err(ChatError::Transport("connection refused".to_string()))
    }
}

fn setup(config: &ChatConfig) -> (Rc<RefCell<ConversationStore>>, MessageDispatcher, EventBus) {
    let bus = EventBus::new();
    let store = Rc::new(RefCell::new(ConversationStore::new(bus.clone())));
    let dispatcher = MessageDispatcher::new(config, bus.clone());
    (store, dispatcher, bus)
}

// ─── MessageDispatcher Tests ─────────────────────────────

#[wasm_bindgen_test]
async fn dispatch_success_end_to_end() {
    let (store, dispatcher, _bus) = setup(&ChatConfig::default());
    let id = store.borrow_mut().create_session("Chat 1");
    let api = MockApi {
        reply: "Here are 3 rooms".to_string(),
    };

    dispatcher
        .send_prompt(&store, &api, &id, "Book a room for 2 nights")
        .await
        .unwrap();

    let store = store.borrow();
    let conversation = &store.get_session(&id).unwrap().conversation;
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[0].sender, Sender::User);
    assert_eq!(conversation[0].message, "Book a room for 2 nights");
    assert_eq!(conversation[1].sender, Sender::Bot);
    assert_eq!(conversation[1].message, "Here are 3 rooms");
    assert!(!dispatcher.is_pending(&id));
}

#[wasm_bindgen_test]
async fn dispatch_failure_appends_nothing_by_default() {
    let (store, dispatcher, bus) = setup(&ChatConfig::default());
    let id = store.borrow_mut().create_session("Chat 1");

    dispatcher
        .send_prompt(&store, &FailingApi, &id, "Book a room")
        .await
        .unwrap();

    let conversation = store.borrow().get_session(&id).unwrap().conversation.clone();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].sender, Sender::User);
    assert!(!dispatcher.is_pending(&id));

    let events = bus.drain();
    assert!(events
        .iter()
        .any(|e| matches!(e, StoreEvent::DispatchFailed { .. })));
}

#[wasm_bindgen_test]
async fn dispatch_failure_surfaced_as_system_message() {
    let config = ChatConfig {
        surface_transport_errors: true,
        ..ChatConfig::default()
    };
    let (store, dispatcher, _bus) = setup(&config);
    let id = store.borrow_mut().create_session("Chat 1");

    dispatcher
        .send_prompt(&store, &FailingApi, &id, "Book a room")
        .await
        .unwrap();

    let conversation = store.borrow().get_session(&id).unwrap().conversation.clone();
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[1].sender, Sender::System);
}

#[wasm_bindgen_test]
async fn dispatch_empty_prompt_is_noop() {
    let (store, dispatcher, _bus) = setup(&ChatConfig::default());
    let id = store.borrow_mut().create_session("Chat 1");
    let api = MockApi {
        reply: "reply".to_string(),
    };

    dispatcher.send_prompt(&store, &api, &id, "   ").await.unwrap();
    assert!(store.borrow().get_session(&id).unwrap().conversation.is_empty());
}

#[wasm_bindgen_test]
async fn dispatch_unknown_session_propagates_not_found() {
    let (store, dispatcher, _bus) = setup(&ChatConfig::default());
    let api = MockApi {
        reply: "reply".to_string(),
    };

    let result = dispatcher
        .send_prompt(&store, &api, &SessionId::new(), "hello")
        .await;
    assert!(matches!(result, Err(ChatError::SessionNotFound(_))));
}
