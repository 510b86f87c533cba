//! Session list sidebar — pick the active conversation, start a new one.

use egui::{self, RichText, Vec2};

use chat_types::session::SessionId;

use crate::theme::*;

/// What the caller should do after rendering the sidebar
pub enum SidebarAction {
    /// Nothing happened
    None,
    /// The user picked a session
    Select(SessionId),
    /// The user clicked "New chat"
    NewChat,
}

/// Render the session list. `sessions` is (id, display name) in
/// creation order.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    active: Option<&SessionId>,
    sessions: &[(SessionId, String)],
) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Chats").color(ACCENT).strong());
                ui.add_space(4.0);

                for (id, name) in sessions {
                    let selected = active == Some(id);
                    if ui
                        .selectable_label(selected, RichText::new(name).color(TEXT_PRIMARY))
                        .clicked()
                    {
                        action = SidebarAction::Select(id.clone());
                    }
                }

                ui.add_space(8.0);

                let new_btn = ui.add(
                    egui::Button::new(RichText::new("+ New chat").color(TEXT_PRIMARY))
                        .fill(BG_SURFACE)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 24.0)),
                );
                if new_btn.clicked() {
                    action = SidebarAction::NewChat;
                }
            });
        });

    action
}
