use crate::api::AgentResponse;
use crate::Result;

/// Events posted by in-flight requests back to the chat widget.
/// The UI drains these once per frame and feeds them to the controller.
#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// A request left the widget
    RequestStarted { request_id: u64 },

    /// The endpoint answered, or the call failed on the way
    ReplyReceived {
        request_id: u64,
        reply: Result<AgentResponse>,
    },
}
