//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `exportmate-core` (pure Rust).
//! Implementations live in `exportmate-platform`.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use exportmate_types::{
    Result,
    api::{AgentRequest, AgentResponse, ModelReply},
    message::ChatMessage,
};

// ─── Completion Port ─────────────────────────────────────────

/// Request to send to the completion provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction first, then the caller's history
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: Option<f32>,
}

/// Hosted text-completion provider.
///
/// Called from the server's request handlers, so it must be `Send`.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// One completion call. No retries happen behind this method.
    async fn complete(&self, req: CompletionRequest) -> Result<ModelReply>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}

// ─── Agent Transport Port ────────────────────────────────────

/// How the chat widget reaches `POST /api/agent`.
///
/// Runs on the browser event loop, hence `?Send`.
#[async_trait(?Send)]
pub trait AgentTransport {
    /// Post the history and return the decoded body.
    /// Non-2xx statuses and undecodable bodies are errors.
    async fn send(&self, req: AgentRequest) -> Result<AgentResponse>;
}
