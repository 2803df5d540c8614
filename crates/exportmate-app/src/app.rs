//! Main egui application: hosts the chat widget and posts its requests.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, ScrollArea, TopBottomPanel};

use exportmate_core::controller::PendingRequest;
use exportmate_core::event_bus::EventBus;
use exportmate_core::ports::AgentTransport;
use exportmate_platform::http::HttpAgentTransport;
use exportmate_types::config::ClientConfig;
use exportmate_ui::panels::chat;
use exportmate_ui::state::UiState;
use exportmate_ui::theme;

const WIDGET_MAX_WIDTH: f32 = 720.0;

/// The main application state
pub struct ExportMateApp {
    ui_state: UiState,
    event_bus: EventBus,
    transport: Rc<dyn AgentTransport>,
    first_frame: bool,
}

impl ExportMateApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let client = ClientConfig::default();
        let transport = HttpAgentTransport::new(&client);
        log::info!("Agent endpoint: {}", transport.endpoint());

        Self {
            ui_state: UiState::new(),
            event_bus: EventBus::new(),
            transport: Rc::new(transport),
            first_frame: true,
        }
    }

    /// Post a committed request (async). The reply comes back over the bus.
    fn dispatch(&self, pending: PendingRequest, ctx: &egui::Context) {
        let transport = self.transport.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();
        let request_id = pending.request_id;

        event_bus.request_started(request_id);

        wasm_bindgen_futures::spawn_local(async move {
            let reply = transport.send(pending.body).await;
            if let Err(e) = &reply {
                log::warn!("Request {} failed: {}", request_id, e);
            }
            event_bus.reply_received(request_id, reply);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ExportMateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain replies from in-flight requests
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("ExportMate AI")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new("High Velocity Export Sales Agent")
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            });
        });

        // ── Main content ─────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(WIDGET_MAX_WIDTH);
                    submitted = chat::chat_panel(ui, &mut self.ui_state);
                });
            });
        });

        if let Some(pending) = submitted {
            self.dispatch(pending, ctx);
        }
    }
}
