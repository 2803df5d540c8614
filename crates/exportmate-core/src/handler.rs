//! Agent endpoint handler: the logic behind `POST /api/agent`.
//!
//! Validates the posted history, then either answers from the fallback
//! template (no credential) or makes exactly one completion call.

use std::sync::Arc;

use exportmate_types::{
    AgentError, Result,
    api::AgentResponse,
    config::AgentConfig,
    message::{ChatMessage, Role},
};
use serde_json::Value;

use crate::fallback::{build_fallback_message, fallback_insights, FALLBACK_WARNING};
use crate::ports::{CompletionPort, CompletionRequest};

pub const EMPTY_HISTORY_PROMPT: &str = "Kripya apna product ya market requirement ek sentence mein share karein. Uske baad main aapko detailed go-to-market plan dunga.";

pub const SERVER_ERROR_APOLOGY: &str = "Server side error aa gaya. Team ko notify kar diya gaya hai. Thodi der baad fir try karein.";

/// HTTP status classes the handler produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    ServerError,
}

impl ResponseStatus {
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::ServerError => 500,
        }
    }
}

/// Status plus JSON body, ready for the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub status: ResponseStatus,
    pub body: AgentResponse,
}

impl HandlerOutcome {
    fn ok(body: AgentResponse) -> Self {
        Self { status: ResponseStatus::Ok, body }
    }

    fn bad_request() -> Self {
        Self {
            status: ResponseStatus::BadRequest,
            body: AgentResponse::failure(EMPTY_HISTORY_PROMPT),
        }
    }

    fn server_error() -> Self {
        Self {
            status: ResponseStatus::ServerError,
            body: AgentResponse::failure(SERVER_ERROR_APOLOGY),
        }
    }
}

/// Which branch a validated request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    Fallback,
    Live,
}

pub struct AgentHandler {
    config: AgentConfig,
    provider: Arc<dyn CompletionPort>,
}

impl AgentHandler {
    /// The config is fixed for the handler's lifetime; whether it carries
    /// an api key decides between fallback and live mode.
    pub fn new(config: AgentConfig, provider: Arc<dyn CompletionPort>) -> Self {
        Self { config, provider }
    }

    pub fn mode(&self) -> AgentMode {
        if self.config.has_credentials() {
            AgentMode::Live
        } else {
            AgentMode::Fallback
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Handle a raw request body. Never fails: every error becomes a 500.
    pub async fn handle(&self, body: &[u8]) -> HandlerOutcome {
        match self.try_handle(body).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Agent error: {}", e);
                HandlerOutcome::server_error()
            }
        }
    }

    async fn try_handle(&self, body: &[u8]) -> Result<HandlerOutcome> {
        let payload: Value = serde_json::from_slice(body)?;
        if payload.is_null() {
            return Err(AgentError::InvalidRequest("request body is null".to_string()));
        }

        let messages = match parse_history(&payload)? {
            Some(messages) => messages,
            None => {
                log::info!("Rejecting request with empty message history");
                return Ok(HandlerOutcome::bad_request());
            }
        };

        match self.mode() {
            AgentMode::Fallback => {
                log::info!(
                    "Serving fallback plan ({} messages, no api key)",
                    messages.len()
                );
                Ok(HandlerOutcome::ok(fallback_response(&messages)))
            }
            AgentMode::Live => {
                log::info!(
                    "Forwarding {} messages to {} ({})",
                    messages.len(),
                    self.provider.provider_name(),
                    self.config.llm.model
                );
                let reply = self.provider.complete(self.completion_request(messages)).await?;
                log::debug!("Model replied with {} chars", reply.text().chars().count());
                Ok(HandlerOutcome::ok(reply.into_response()))
            }
        }
    }

    /// System instruction first, then the caller's history verbatim.
    pub fn completion_request(&self, history: Vec<ChatMessage>) -> CompletionRequest {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(&self.config.system_prompt));
        messages.extend(history);

        CompletionRequest {
            messages,
            model: self.config.llm.model.clone(),
            max_output_tokens: self.config.llm.max_output_tokens,
            temperature: self.config.llm.temperature,
        }
    }
}

/// Extract the message list.
///
/// `Ok(None)` when it is missing, not an array, or empty.
/// Entries that do not decode, or that claim the system role, are errors.
pub fn parse_history(payload: &Value) -> Result<Option<Vec<ChatMessage>>> {
    let entries = match payload.get("messages") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Ok(None),
    };

    let messages: Vec<ChatMessage> = entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()))
        .collect::<std::result::Result<_, _>>()?;

    if messages.iter().any(|m| m.role == Role::System) {
        return Err(AgentError::InvalidRequest(
            "system role is reserved for the server".to_string(),
        ));
    }

    Ok(Some(messages))
}

/// Canned reply built around the latest user prompt.
pub fn fallback_response(messages: &[ChatMessage]) -> AgentResponse {
    let prompt = latest_prompt(messages).unwrap_or_default();
    AgentResponse::reply(build_fallback_message(prompt))
        .with_insights(fallback_insights())
        .with_warning(FALLBACK_WARNING)
}

/// Last user message, or the last message when no user spoke.
pub fn latest_prompt(messages: &[ChatMessage]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .or_else(|| messages.last())
        .map(|m| m.content.as_str())
}
