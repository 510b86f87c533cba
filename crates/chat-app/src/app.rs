//! Main egui application — composes the sidebar and conversation view
//! and owns the conversation store.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::dispatcher::MessageDispatcher;
use chat_core::event_bus::EventBus;
use chat_core::ports::ChatApiPort;
use chat_core::store::ConversationStore;
use chat_platform::HttpChatApi;
use chat_types::config::ChatConfig;
use chat_types::session::SessionId;
use chat_ui::panels::{conversation, sidebar};
use chat_ui::state::UiState;
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    store: Rc<RefCell<ConversationStore>>,
    dispatcher: MessageDispatcher,
    api: Rc<dyn ChatApiPort>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ChatConfig::default();
        let event_bus = EventBus::new();
        let store = Rc::new(RefCell::new(ConversationStore::new(event_bus.clone())));
        let dispatcher = MessageDispatcher::new(&config, event_bus.clone());

        let mut ui_state = UiState::new();
        ui_state.surface_failures = config.surface_transport_errors;

        let api: Rc<dyn ChatApiPort> = Rc::new(HttpChatApi::new(config));

        // One session exists at startup; nothing is active until the
        // user picks it in the sidebar.
        store.borrow_mut().create_session("Chat 1");

        Self {
            ui_state,
            event_bus,
            store,
            dispatcher,
            api,
            first_frame: true,
        }
    }

    /// Hand a submitted prompt to the dispatcher (async, off the render
    /// path).
    fn dispatch_prompt(&self, session_id: SessionId, prompt: String, ctx: &egui::Context) {
        let store = self.store.clone();
        let dispatcher = self.dispatcher.clone();
        let api = self.api.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = dispatcher
                .send_prompt(&store, api.as_ref(), &session_id, &prompt)
                .await
            {
                log::error!("Dispatch error: {}", e);
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the store and dispatcher
        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        if self.ui_state.active_is_pending() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let toggle = if self.ui_state.sidebar_collapsed { "☰" } else { "◀" };
                if ui.button(toggle).clicked() {
                    self.ui_state.sidebar_collapsed = !self.ui_state.sidebar_collapsed;
                }
                ui.separator();
                ui.label(
                    RichText::new("Resort Chat")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
            });
        });

        // ── Sidebar ──────────────────────────────────────────
        let mut action = sidebar::SidebarAction::None;
        if !self.ui_state.sidebar_collapsed {
            let sessions: Vec<(SessionId, String)> = self
                .store
                .borrow()
                .list_sessions()
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect();

            SidePanel::left("session_list")
                .min_width(160.0)
                .max_width(220.0)
                .show(ctx, |ui| {
                    action = sidebar::sidebar_panel(
                        ui,
                        self.ui_state.active_session.as_ref(),
                        &sessions,
                    );
                });
        }

        match action {
            sidebar::SidebarAction::Select(id) => self.ui_state.select_active(id),
            sidebar::SidebarAction::NewChat => {
                let name = format!("Chat {}", self.store.borrow().len() + 1);
                let id = self.store.borrow_mut().create_session(name);
                self.ui_state.select_active(id);
            }
            sidebar::SidebarAction::None => {}
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let active = self.ui_state.active_session.clone();
            let session = active
                .as_ref()
                .and_then(|id| self.store.borrow().get_session(id).cloned());

            match session {
                Some(session) => {
                    if let Some(prompt) =
                        conversation::conversation_panel(ui, &mut self.ui_state, &session)
                    {
                        if let Some(id) = active {
                            self.dispatch_prompt(id, prompt, ctx);
                        }
                    }
                }
                None => {
                    // Also covers an active id that misses the store
                    let has_sessions = !self.store.borrow().is_empty();
                    conversation::empty_panel(ui, has_sessions);
                }
            }
        });
    }
}
