//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;

use crate::error::WebServerResult;
use shared::{GenerationRequest, NameResult};

/// Name generation service trait
#[mockall::automock]
#[async_trait]
pub trait NameGenerator: Send + Sync {
    /// Produce the full suggestion list for one validated request
    async fn generate(&self, request: &GenerationRequest) -> WebServerResult<Vec<NameResult>>;
}
