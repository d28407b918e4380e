//! HTTP service exposing the crawl as `POST /jobs`
//!
//! Routes:
//! - `POST /jobs` - crawl and return a JSON array of `{title, link}`
//! - `OPTIONS /jobs` - CORS preflight, always 200
//! - `GET /health` - liveness probe

mod error;
mod routes;

pub use error::handle_panic;
pub use routes::{health_handler, jobs_handler, preflight_handler, JobsRequest};

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::crawler::Harvester;
use crate::HarvestError;

/// Shared application state
///
/// Only the harvester (and with it the HTTP client's connection pool) is
/// shared; each request runs its own crawl.
#[derive(Clone)]
pub struct AppState {
    pub harvester: Arc<Harvester>,
}

/// Build the Axum application router
pub fn build_router(harvester: Arc<Harvester>) -> Router {
    let routes = Router::new()
        .route("/jobs", post(jobs_handler).options(preflight_handler))
        .route("/health", get(health_handler));

    with_layers(routes).with_state(AppState { harvester })
}

/// Wraps routes in the service middleware: panic recovery, CORS and request tracing
pub fn with_layers(routes: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    // Layers apply in reverse order: panics are caught before CORS headers are added
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serves the router on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, harvester: Harvester) -> Result<(), HarvestError> {
    let app = build_router(Arc::new(harvester));

    tracing::info!(address = %listener.local_addr()?, "Job-Harvest listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Binds `bind_address` and serves until Ctrl-C
pub async fn serve(bind_address: &str, harvester: Harvester) -> Result<(), HarvestError> {
    let listener = TcpListener::bind(bind_address).await?;
    serve_on(listener, harvester).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
