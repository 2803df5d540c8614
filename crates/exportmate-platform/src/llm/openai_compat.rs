//! OpenAI-compatible completion adapter.
//!
//! Works with OpenAI and any provider using the OpenAI chat completions
//! API format. Uses reqwest on the native server.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use exportmate_core::ports::{CompletionPort, CompletionRequest};
use exportmate_types::{
    Result, AgentError,
    api::ModelReply,
    config::LlmConfig,
};

/// Provider that speaks the OpenAI chat completions protocol.
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiCompatProvider {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.api_base.trim_end_matches('/'))
    }

    pub fn build_request_body(&self, req: &CompletionRequest) -> Value {
        let messages: Vec<Value> = req
            .messages
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            })
            .collect();

        let mut body = json!({
            "model": req.model,
            "messages": messages,
            "max_tokens": req.max_output_tokens,
        });

        if let Some(temperature) = req.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }
}

#[async_trait]
impl CompletionPort for OpenAiCompatProvider {
    async fn complete(&self, req: CompletionRequest) -> Result<ModelReply> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AgentError::Config("OPENAI_API_KEY is not set".to_string()))?;

        let body = self.build_request_body(&req);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AgentError::Llm(format!("HTTP {}: {}", status, text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Llm(e.to_string()))?;

        parse_completion(data)
    }

    fn provider_name(&self) -> &str {
        "openai-compatible"
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// First choice's text. A missing choice or empty content is a provider error.
pub fn parse_completion(data: ApiResponse) -> Result<ModelReply> {
    if let Some(usage) = &data.usage {
        log::debug!(
            "Completion used {} prompt + {} completion tokens",
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }

    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AgentError::Llm("No choices in response".to_string()))?;

    match choice.message.content {
        Some(text) if !text.trim().is_empty() => Ok(ModelReply::ModelText(text)),
        _ => Err(AgentError::Llm("Empty completion text".to_string())),
    }
}
