//! Chat widget controller: transcript, input, and the one-request guard.
//!
//! Two states: `Idle` and `Sending`. A submit moves Idle → Sending and
//! hands back the request to post; the reply (or failure) moves it back.
//! Submits while Sending are dropped, not queued.

use exportmate_types::{
    AgentError, Result,
    api::{AgentRequest, AgentResponse},
    insights::Insights,
    message::{ChatMessage, Message, Role},
};

use crate::insights::{derive_insights, KeywordSets};

pub const INTRO_MESSAGE_ID: &str = "intro";

pub const INTRO_MESSAGE: &str = "Namaste! Main ExportMate AI hoon — aapke export business ke liye 24x7 sales strategist. Mujhe apka product, target market ya koi bhi sawaal batayein aur main turant buyer insights, pitch ideas aur compliance tips share karunga.";

pub const NETWORK_APOLOGY: &str = "Network issue aa rahi hai. Kripya thodi der baad dobara try karein ya apni internet connection check karein.";

pub const STARTER_PROMPTS: [&str; 3] = [
    "Find high-margin buyers for Indian organic spices in Europe.",
    "Draft a sales pitch for exporting engineered wood to the Middle East.",
    "Suggest logistics partners for frozen seafood exports to Japan.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Sending { request_id: u64 },
}

/// A request the controller has committed to; the caller must post it
/// and report back through [`ChatController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub request_id: u64,
    pub body: AgentRequest,
}

pub struct ChatController {
    messages: Vec<Message>,
    /// Input field content
    pub input: String,
    insights: Option<Insights>,
    warning: Option<String>,
    state: WidgetState,
    keywords: KeywordSets,
    scroll_pending: bool,
    request_counter: u64,
}

impl ChatController {
    pub fn new() -> Self {
        Self::with_keywords(KeywordSets::default())
    }

    pub fn with_keywords(keywords: KeywordSets) -> Self {
        Self {
            messages: vec![Message::with_id(INTRO_MESSAGE_ID, Role::Assistant, INTRO_MESSAGE)],
            input: String::new(),
            insights: None,
            warning: None,
            state: WidgetState::Idle,
            keywords,
            scroll_pending: true,
            request_counter: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn insights(&self) -> Option<&Insights> {
        self.insights.as_ref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, WidgetState::Sending { .. })
    }

    /// History as it goes over the wire.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.messages.iter().map(Message::to_chat).collect()
    }

    /// Returns true once after each transcript or sending-flag change.
    /// The view scrolls to the newest message when it sees true.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    /// Submit whatever is in the input field.
    pub fn submit_input(&mut self) -> Option<PendingRequest> {
        let prompt = self.input.clone();
        self.submit_prompt(&prompt)
    }

    /// Submit a prompt (typed or a starter prompt).
    ///
    /// `None` when the prompt is blank or a request is already in flight.
    pub fn submit_prompt(&mut self, prompt: &str) -> Option<PendingRequest> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.is_sending() {
            return None;
        }

        self.messages.push(Message::user(prompt));
        self.input.clear();
        self.warning = None;

        self.request_counter += 1;
        let request_id = self.request_counter;
        self.state = WidgetState::Sending { request_id };
        self.scroll_pending = true;

        Some(PendingRequest {
            request_id,
            body: AgentRequest {
                messages: self.history(),
            },
        })
    }

    /// Apply the outcome of request `request_id`.
    ///
    /// Returns false (and changes nothing) when that request is not the
    /// one in flight.
    pub fn complete(&mut self, request_id: u64, reply: Result<AgentResponse>) -> bool {
        if self.state != (WidgetState::Sending { request_id }) {
            log::warn!("Ignoring reply for stale request {}", request_id);
            return false;
        }

        self.state = WidgetState::Idle;
        self.scroll_pending = true;

        let reply = reply.and_then(|response| {
            if let Some(warning) = &response.warning {
                self.warning = Some(warning.clone());
            }
            if response.message.is_empty() {
                Err(AgentError::EmptyReply)
            } else {
                Ok(response)
            }
        });

        let response = match reply {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Agent request failed: {}", e);
                self.messages.push(Message::assistant(NETWORK_APOLOGY));
                return true;
            }
        };

        let insights = response
            .insights
            .unwrap_or_else(|| derive_insights(&response.message, &self.keywords));

        self.messages.push(Message::assistant(response.message));
        self.insights = Some(insights);
        true
    }
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}
