//! Request encoding and reply decoding for `/api/agent`, kept apart from
//! `fetch` so both run off the browser.

use exportmate_types::{
    Result, AgentError,
    api::{AgentRequest, AgentResponse},
};

/// JSON body posted to the agent endpoint.
pub fn encode_request(req: &AgentRequest) -> Result<String> {
    Ok(serde_json::to_string(req)?)
}

/// A non-2xx status is a failure whatever the body says.
pub fn decode_reply(status: u16, body: &str) -> Result<AgentResponse> {
    if !(200..300).contains(&status) {
        return Err(AgentError::Network(format!("HTTP {}", status)));
    }

    serde_json::from_str(body).map_err(|e| AgentError::Serialization(e.to_string()))
}
