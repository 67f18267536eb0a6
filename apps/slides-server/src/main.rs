//! Service Slides Checker Server
//!
//! Accepts uploaded service decks (.pptx) together with the order of service,
//! the service date and the sermon discussion questions, and returns the
//! results of every content check per deck.
//!
//! ## Endpoints
//!
//! - `POST /api/upload/` - multipart upload, returns results per file
//! - `GET /api/defaults` - sample inputs for the upload form
//! - `GET /health` - health check
//! - `GET /` plus `/static` and `/_next` - the exported frontend

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use clap::builder::BoolishValueParser;
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_defaults, handle_health, handle_upload};

/// Origins allowed to call the API while the frontend runs on its dev server
const DEVELOPMENT_ORIGINS: &[&str] = &[
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5000",
    "http://localhost:3000",
    "http://localhost:5000",
];

/// Command-line arguments for the slides checker server
#[derive(Parser, Debug)]
#[command(name = "slides-server")]
#[command(about = "Checks service slide decks against the order of service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Directory holding the exported frontend (index.html, _next/)
    #[arg(long, default_value = "./frontend/out")]
    static_dir: PathBuf,

    /// Allow cross-origin requests from the local frontend dev server
    #[arg(long, env = "DEVELOPMENT_MODE", value_parser = BoolishValueParser::new())]
    development_mode: bool,

    /// Maximum upload size in megabytes
    #[arg(long, default_value = "50")]
    max_upload_mb: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Directory holding the exported frontend
    pub static_dir: PathBuf,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
    /// Enables the development CORS policy
    pub development_mode: bool,
}

fn development_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = DEVELOPMENT_ORIGINS
        .iter()
        .copied()
        .map(HeaderValue::from_static)
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/defaults", get(handle_defaults))
        .route("/api/upload", post(handle_upload))
        .route("/api/upload/", post(handle_upload))
        // Exported frontend
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/_next", ServeDir::new(static_dir.join("_next")))
        .nest_service("/static", ServeDir::new(&static_dir))
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        );

    if state.development_mode {
        app.layer(development_cors())
    } else {
        app
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    info!("Starting slides checker on {}:{}", args.host, args.port);

    let state = AppState {
        static_dir: args.static_dir.clone(),
        max_upload_bytes: args.max_upload_mb * 1024 * 1024,
        development_mode: args.development_mode,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Serving frontend from {}", args.static_dir.display());
    if args.development_mode {
        info!("Development mode: CORS enabled for {:?}", DEVELOPMENT_ORIGINS);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
