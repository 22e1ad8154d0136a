//! Status and health endpoints

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde_json::{Value, json};

use crate::traits::NameGenerator;
use crate::webserver_impl::WebServer;

/// Get server status
pub async fn get_status<G>(State(server): State<WebServer<G>>) -> Json<Value>
where
    G: NameGenerator + 'static,
{
    let state = server.state();

    Json(json!({
        "status": "running",
        "uptime_seconds": state.get_uptime_seconds(),
        "streams_started": state.get_streams_started(),
        "active_streams": state.get_active_streams(),
        "server_time": Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint
pub async fn health_check<G>(State(server): State<WebServer<G>>) -> Json<Value>
where
    G: NameGenerator + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": server.state().get_uptime_seconds(),
    }))
}
