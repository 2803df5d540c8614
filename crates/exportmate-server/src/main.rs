use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use exportmate_core::handler::{AgentHandler, AgentMode};
use exportmate_platform::llm::OpenAiCompatProvider;
use exportmate_server::build_router;
use exportmate_types::config::{AgentConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AgentConfig::from_env().context("loading agent configuration")?;
    let server = ServerConfig::from_env();

    let provider = Arc::new(OpenAiCompatProvider::new(config.llm.clone()));
    let handler = Arc::new(AgentHandler::new(config, provider));

    match handler.mode() {
        AgentMode::Live => tracing::info!(
            "Live mode: model {}, max {} output tokens",
            handler.config().llm.model,
            handler.config().llm.max_output_tokens
        ),
        AgentMode::Fallback => {
            tracing::warn!("OPENAI_API_KEY not set, serving heuristic fallback plans")
        }
    }

    let app = build_router(handler, server.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&server.bind_addr)
        .await
        .with_context(|| format!("binding {}", server.bind_addr))?;
    tracing::info!("ExportMate agent API listening on {}", server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
