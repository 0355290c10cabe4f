//! Turtle Soup - LLM-hosted lateral thinking game for group chats
//!
//! Each chat scope gets one in-memory game session; puzzle text, answers,
//! hints and guess verdicts all come from an `OpenAI`-compatible model.

mod api;
mod command;
mod config;
mod engine;
mod game;
mod llm;
mod prompts;
mod store;

use api::{create_router, AppState};
use config::Config;
use engine::GameEngine;
use llm::{LlmService, LoggingService, OpenAIService};
use std::net::SocketAddr;
use std::sync::Arc;
use store::MemorySessionStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turtle_soup=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env()?;
    tracing::info!(
        enabled = config.plugin.enabled,
        prefix = %config.plugin.command_prefix,
        model = %config.llm.model,
        api_url = %config.llm.api_url,
        "Configuration loaded"
    );
    if !config.llm.is_complete() {
        tracing::warn!("LLM API URL or key missing. Set TURTLE_SOUP_API_KEY; commands will be rejected.");
    }

    // Collaborator
    let service: Arc<dyn LlmService> = Arc::new(OpenAIService::new(&config.llm)?);
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(service));

    let engine = GameEngine::new(&config, Arc::new(MemorySessionStore::new()), llm)?;
    let app = create_router(AppState::new(engine));

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Turtle soup server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
