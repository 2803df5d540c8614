//! HTTP surface for the agent endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use exportmate_core::handler::AgentHandler;
use exportmate_types::api::AgentResponse;


#[derive(Clone)]
pub struct AppState {
    handler: Arc<AgentHandler>,
}

async fn handle_agent(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<AgentResponse>) {
    let outcome = state.handler.handle(&body).await;
    let status = StatusCode::from_u16(outcome.status.code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    tracing::info!("POST /api/agent -> {}", status);
    (status, Json(outcome.body))
}

async fn health_check() -> &'static str {
    "ExportMate agent API is running"
}

/// Routes: `POST /api/agent`, `GET /health`, and the static bundle when given.
pub fn build_router(handler: Arc<AgentHandler>, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/agent", post(handle_agent))
        .with_state(AppState { handler });

    if let Some(dir) = static_dir {
        tracing::info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}
