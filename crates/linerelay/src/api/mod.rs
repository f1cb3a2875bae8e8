//! HTTP API implementation
//!
//! This module provides the webhook endpoint and its supporting routes.

pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::Config;
use crate::error::Result;
use crate::notify::PushService;

/// HTTP API server
pub struct HttpServer {
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(
        config: Arc<Config>,
        push: Arc<dyn PushService>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            state: AppState {
                config,
                push,
                metrics,
            },
        }
    }

    /// Start the HTTP server
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = create_router(self.state).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(addr).await?;

        info!("HTTP server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
