//! Wire payloads for `POST /api/agent`.

use serde::{Deserialize, Serialize};

use crate::insights::Insights;
use crate::message::ChatMessage;

/// Request body posted by the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub messages: Vec<ChatMessage>,
}

/// Response body returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub insights: Option<Insights>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub warning: Option<String>,
}

impl AgentResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            insights: None,
            warning: None,
        }
    }

    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            insights: None,
            warning: None,
        }
    }

    pub fn with_insights(mut self, insights: Insights) -> Self {
        self.insights = Some(insights);
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// What the completion provider handed back.
///
/// Today every provider answers with free text; `Structured` is reserved
/// for providers that return insights directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    ModelText(String),
    Structured { text: String, insights: Insights },
}

impl ModelReply {
    pub fn text(&self) -> &str {
        match self {
            ModelReply::ModelText(text) => text,
            ModelReply::Structured { text, .. } => text,
        }
    }

    pub fn into_response(self) -> AgentResponse {
        match self {
            ModelReply::ModelText(text) => AgentResponse::reply(text),
            ModelReply::Structured { text, insights } => {
                AgentResponse::reply(text).with_insights(insights)
            }
        }
    }
}
