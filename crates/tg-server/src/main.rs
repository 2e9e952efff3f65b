//! tg-server - HTTP boundary for the SQL test-scenario generator
//!
//! The core (parsing, extraction, synthesis) is synchronous and purely
//! functional, so handlers call it directly with no locking; the only
//! blocking collaborator is the optional AI supplement.

use anyhow::{Context, Result};
use axum::routing::post;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod error;
mod routes;

use cli::ServeArgs;
use routes::{generate, generate_ai, generate_hybrid, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServeArgs::parse();

    let state = Arc::new(AppState::new(&args.dialect).context("Invalid SQL dialect")?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/testcase/generate", post(generate))
        .route("/testcase/generate-ai", post(generate_ai))
        .route("/testcase/generate-hybrid", post(generate_hybrid))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host/port")?;
    tracing::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
