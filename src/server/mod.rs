//! HTTP surface: router construction, shared state and the serve loop.

pub mod handlers;
pub mod middleware;

use crate::core::dataset::Dataset;
use crate::core::query::ReleaseQueries;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// State handed to every handler. Immutable after construction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub queries: ReleaseQueries,
    pub public_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(dataset: Dataset, public_url: Option<&str>) -> Self {
        Self {
            queries: ReleaseQueries::new(Arc::new(dataset)),
            public_url: public_url.map(|url| Arc::from(url.trim_end_matches('/'))),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/peliculas/mes/", get(handlers::movies_by_month))
        .route("/peliculas/mes", get(handlers::movies_by_month))
        .route("/peliculas/dia/", get(handlers::movies_by_weekday))
        .route("/peliculas/dia", get(handlers::movies_by_weekday))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}

/// Serves until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
