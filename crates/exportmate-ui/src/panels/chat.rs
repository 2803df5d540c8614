//! Chat panel: header, insights, transcript, input form, starter prompts.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};
use exportmate_core::controller::{PendingRequest, STARTER_PROMPTS};
use exportmate_types::message::Message;
use crate::panels::insights::{insights_panel, warning_banner};
use crate::state::UiState;
use crate::theme::*;

const TRANSCRIPT_HEIGHT: f32 = 288.0;

/// Render the chat panel. Returns the request to post when the user submits.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<PendingRequest> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(
                            RichText::new("ExportMate Agent Console")
                                .color(TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.label(
                            RichText::new("Buyer discovery, pitches aur compliance coaching ek hi jagah.")
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { ACCENT } else { TEXT_SECONDARY };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.add_space(8.0);
                insights_panel(ui, state.controller.insights());
                ui.add_space(4.0);
                warning_banner(ui, state.controller.warning());
                ui.add_space(4.0);

                // Transcript
                let scroll_to_bottom = state.controller.take_scroll_request();
                egui::Frame::default()
                    .fill(BG_PRIMARY)
                    .stroke(Stroke::new(1.0, BORDER))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .max_height(TRANSCRIPT_HEIGHT)
                            .auto_shrink([false, false])
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for message in state.controller.messages() {
                                    render_message(ui, message);
                                    ui.add_space(6.0);
                                }

                                if state.is_busy() {
                                    ui.label(
                                        RichText::new("Agent thinking…")
                                            .color(TEXT_SECONDARY)
                                            .small(),
                                    );
                                }

                                let anchor = ui.allocate_response(Vec2::ZERO, egui::Sense::hover());
                                if scroll_to_bottom {
                                    anchor.scroll_to_me(Some(Align::BOTTOM));
                                }
                            });
                    });

                ui.add_space(8.0);

                // Input form
                ui.label(
                    RichText::new("What should ExportMate work on?")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.controller.input)
                        .hint_text("e.g. Identify premium tea buyers in Dubai and suggest a WhatsApp sales pitch.")
                        .desired_width(ui.available_width() - 150.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let busy = state.is_busy();
                    let label = if busy { "Sending…" } else { "Generate Strategy" };
                    let send_btn = ui.add_enabled(
                        !busy,
                        egui::Button::new(RichText::new(label).color(TEXT_ON_ACCENT).strong())
                            .fill(if busy { ACCENT_MUTED } else { ACCENT })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(140.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        submitted = state.submit_input();
                        if submitted.is_some() {
                            response.request_focus();
                        }
                    }
                });

                ui.add_space(8.0);

                // Starter prompts
                ui.label(
                    RichText::new("NEED INSPIRATION?")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.horizontal_wrapped(|ui| {
                    for prompt in STARTER_PROMPTS {
                        let chip = egui::Button::new(
                            RichText::new(prompt).color(TEXT_SECONDARY).small(),
                        )
                        .fill(BG_SECONDARY)
                        .stroke(Stroke::new(1.0, BORDER))
                        .corner_radius(BUBBLE_ROUNDING);

                        if ui.add(chip).clicked() && submitted.is_none() {
                            submitted = state.submit_prompt(prompt);
                        }
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let is_user = message.is_user();
    let (fill, text_color, align) = if is_user {
        (USER_BUBBLE, TEXT_ON_ACCENT, Align::Max)
    } else {
        (BG_SECONDARY, TEXT_PRIMARY, Align::Min)
    };
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(fill)
            .stroke(Stroke::new(1.0, if is_user { USER_BUBBLE } else { BORDER }))
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Vec2::new(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                for (index, line) in message.content.split('\n').enumerate() {
                    if index > 0 {
                        ui.add_space(4.0);
                    }
                    ui.label(RichText::new(line).color(text_color));
                }
            });
    });
}
