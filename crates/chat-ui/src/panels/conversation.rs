//! Conversation view — the active session's transcript plus the
//! prompt input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_types::message::{Message, Sender};
use chat_types::session::ChatSession;

use crate::state::UiState;
use crate::theme::*;

/// Render the conversation panel for the active session.
/// Returns Some(prompt) when the user submits input.
pub fn conversation_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
) -> Option<String> {
    let mut submitted = None;
    let pending = state.active_is_pending();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&session.name)
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if pending { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Transcript area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &session.conversation {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        // Trailing loading indicator while the reply is
                        // in flight
                        if pending {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new().color(ACCENT));
                                ui.label(
                                    RichText::new("Waiting for reply...")
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Enter your prompt here...")
                        .desired_width(ui.available_width() - 80.0)
                        .interactive(!pending)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty() && !pending;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Submit").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(70.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        submitted = Some(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

/// The display when no session is active: either nothing is selected or
/// the store is empty (covers unknown/removed active ids too).
pub fn empty_panel(ui: &mut egui::Ui, has_sessions: bool) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.centered_and_justified(|ui| {
                let text = if has_sessions {
                    "Select a chat to start messaging"
                } else {
                    "No chats available.\nCreate one."
                };
                ui.heading(RichText::new(text).color(TEXT_SECONDARY));
            });
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match message.sender {
        Sender::User => ("You", ACCENT, USER_BUBBLE),
        Sender::Bot => ("Concierge", SUCCESS, BOT_BUBBLE),
        Sender::System => ("Notice", ERROR, NOTICE_BUBBLE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.message).color(TEXT_PRIMARY));
        });
}
