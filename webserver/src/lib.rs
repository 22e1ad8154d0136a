//! Webserver library for the name suggestion system
//!
//! Hosts the generation endpoint: one server-sent-event stream per request,
//! backed by an LLM provider client that turns naming preferences into
//! suggestions.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::NameGenerator;

// Re-export service implementations
pub use services::RealNameGenerator;
