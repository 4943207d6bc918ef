//! Business Plan Analyzer Server
//!
//! Accepts a .docx business plan and returns a heuristic scorecard:
//!
//! - Scalability signals (architecture, growth, automation, limitations)
//! - Market validation signals (usage, competitors, differentiators)
//! - Feasibility gaps and documentation recommendations
//! - An overall viability score
//!
//! ## Architecture
//!
//! All scoring lives in `analysis-engine`; this binary only handles upload
//! parsing, configuration and the HTTP surface. Each request is analyzed
//! independently with no shared mutable state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analysis_engine::AnalysisEngine;

mod api;
mod error;

use api::{handle_analyze, handle_analyze_text, handle_health, handle_list_rules};

/// Command-line arguments for the analyzer server
#[derive(Parser, Debug)]
#[command(name = "analyzer-server")]
#[command(about = "Heuristic business plan analyzer")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "ANALYZER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "ANALYZER_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// Largest accepted upload in bytes
    #[arg(long, env = "ANALYZER_MAX_UPLOAD_BYTES", default_value = "10485760")]
    max_upload_bytes: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: AnalysisEngine,
}

/// Routes and per-request layers, without rate limiting
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Analysis
        .route("/analyze", post(handle_analyze))
        .route("/api/analyze/text", post(handle_analyze_text))
        .route("/api/rules", get(handle_list_rules))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting analyzer server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState {
        engine: AnalysisEngine::new(),
    };

    let app = build_router(state, args.max_upload_bytes).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Max upload size: {} bytes", args.max_upload_bytes);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
