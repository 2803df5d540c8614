//! UI-level state that drives rendering.
//! Wraps the chat controller and folds bus events into it each frame.

use exportmate_core::controller::{ChatController, PendingRequest};
use exportmate_types::event::AgentEvent;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_DRAFTING: &str = "Drafting response…";
pub const STATUS_FAILED: &str = "Last request failed";

/// State visible to UI panels
pub struct UiState {
    pub controller: ChatController,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            controller: ChatController::new(),
            status_text: STATUS_READY.to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AgentEvent>) {
        for event in events {
            match event {
                AgentEvent::RequestStarted { request_id } => {
                    log::debug!("Request {} in flight", request_id);
                    self.status_text = STATUS_DRAFTING.to_string();
                }
                AgentEvent::ReplyReceived { request_id, reply } => {
                    let failed = reply.as_ref().map_or(true, |r| r.message.is_empty());
                    if self.controller.complete(request_id, reply) {
                        self.status_text = if failed {
                            STATUS_FAILED.to_string()
                        } else {
                            STATUS_READY.to_string()
                        };
                    }
                }
            }
        }
    }

    /// Submit the input field. `None` when the controller's guard rejects it.
    pub fn submit_input(&mut self) -> Option<PendingRequest> {
        self.controller.submit_input()
    }

    /// Submit a starter prompt.
    pub fn submit_prompt(&mut self, prompt: &str) -> Option<PendingRequest> {
        self.controller.submit_prompt(prompt)
    }

    pub fn is_busy(&self) -> bool {
        self.controller.is_sending()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
