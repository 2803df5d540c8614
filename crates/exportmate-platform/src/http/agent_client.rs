//! Browser transport for the chat widget.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;

use exportmate_core::ports::AgentTransport;
use super::wire::{decode_reply, encode_request};
use exportmate_types::{
    Result, AgentError,
    api::{AgentRequest, AgentResponse},
    config::ClientConfig,
};

/// Posts the conversation to the agent endpoint, one attempt per call.
pub struct HttpAgentTransport {
    endpoint: String,
}

impl HttpAgentTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl AgentTransport for HttpAgentTransport {
    async fn send(&self, req: AgentRequest) -> Result<AgentResponse> {
        let body = encode_request(&req)?;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AgentError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        decode_reply(status, &text)
    }
}
