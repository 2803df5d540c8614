use serde::{Deserialize, Serialize};

use crate::{AgentError, Result};

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_API_BASE: &str = "OPENAI_API_BASE";
pub const ENV_MAX_OUTPUT_TOKENS: &str = "EXPORTMATE_MAX_OUTPUT_TOKENS";
pub const ENV_BIND: &str = "EXPORTMATE_BIND";
pub const ENV_STATIC_DIR: &str = "EXPORTMATE_STATIC_DIR";

/// Top-level agent configuration, handed to the endpoint handler once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub llm: LlmConfig,
    pub system_prompt: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl AgentConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.llm.api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            config.llm.model = model.trim().to_string();
        }

        if let Some(base) = lookup(ENV_API_BASE).filter(|b| !b.trim().is_empty()) {
            config.llm.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(ENV_MAX_OUTPUT_TOKENS) {
            config.llm.max_output_tokens = raw
                .trim()
                .parse()
                .ok()
                .filter(|&tokens: &u32| tokens > 0)
                .ok_or_else(|| {
                    AgentError::Config(format!("{} must be a positive integer, got {:?}", ENV_MAX_OUTPUT_TOKENS, raw))
                })?;
        }

        Ok(config)
    }

    pub fn has_credentials(&self) -> bool {
        self.llm.api_key.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Absent key means fallback mode, not an error.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com".to_string(),
            max_output_tokens: 900,
            temperature: None,
        }
    }
}

/// Where the native server listens and what it serves besides the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(addr) = lookup(ENV_BIND).filter(|a| !a.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }
        config.static_dir = lookup(ENV_STATIC_DIR).filter(|d| !d.trim().is_empty());
        config
    }
}

/// Browser-side settings for the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/agent".to_string(),
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are ExportMate AI, a bilingual (Hindi-English) sales strategist for Indian exporters.
Objectives:
- Understand the product, target buyers, trade lanes, certifications, pricing, and logistics constraints.
- Produce structured guidance with bullet points, sales copy ideas, buyer qualification questions, and compliance reminders.
- Suggest realistic next actions tailored to SMEs, including WhatsApp/email outreach scripts.
- Use a friendly, encouraging tone mixing professional English with supporting Hindi phrases.
- If details are missing, highlight the assumptions.
Constraints:
- Keep answers under 350 words.
- Organize content with clear sub-headings and short bullets.
- Provide numeric insights (pricing bands, lead times) when reasonable.
- Always close with a 2-step action plan.
"#;
