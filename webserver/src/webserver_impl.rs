//! Main webserver implementation
//!
//! Wires the generation service into an Axum router and owns the server
//! lifecycle.

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::NameGenerator;
use crate::web::handlers::{generate_name_stream, get_status, health_check};
use shared::{ProcessId, logging};

/// Main webserver struct with dependency injection
pub struct WebServer<G: NameGenerator> {
    state: Arc<WebServerState>,
    generator: Arc<G>,
}

impl<G: NameGenerator> Clone for WebServer<G> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            generator: self.generator.clone(),
        }
    }
}

impl<G: NameGenerator + 'static> WebServer<G> {
    /// Create a new webserver around a generation service
    pub fn new(generator: G) -> Self {
        Self {
            state: Arc::new(WebServerState::new()),
            generator: Arc::new(generator),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // The stream endpoint the client consumes
            .route(shared::STREAM_PATH, get(generate_name_stream::<G>))
            // Operational routes
            .route("/api/status", get(get_status::<G>))
            .route("/health", get(health_check::<G>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver and run until shutdown
    pub async fn run(&self, addr: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}"))
        })?;

        shared::process_info!(
            ProcessId::current(),
            "🌐 Generation endpoint listening on http://{}{}",
            addr,
            shared::STREAM_PATH
        );

        tokio::select! {
            result = async { axum::serve(listener, router).await } => {
                result.map_err(|e| WebServerError::ServerStartup(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
            }
        }

        Ok(())
    }

    /// Shared server state
    pub fn state(&self) -> Arc<WebServerState> {
        self.state.clone()
    }

    /// Generation service handle
    pub fn generator(&self) -> Arc<G> {
        self.generator.clone()
    }
}
