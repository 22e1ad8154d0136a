//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::ClientResult;
use crate::types::StreamEvent;
use shared::{GenerationRequest, NameResult};

/// Server push stream access
#[mockall::automock]
#[async_trait]
pub trait StreamOpener: Send + Sync {
    /// Open the push stream for one serialized request.
    ///
    /// The returned receiver yields suggestion events until a terminal
    /// `Done` or `Failed` event; dropping it detaches the stream.
    async fn open(&self, request: &GenerationRequest) -> ClientResult<mpsc::Receiver<StreamEvent>>;
}

/// Rendering surface owned by the controller's host
#[mockall::automock]
pub trait ResultView: Send + Sync {
    /// One suggestion arrived and was appended to the result set
    fn name_received(&self, result: &NameResult);

    /// The stream completed; `total` results were rendered
    fn generation_succeeded(&self, total: usize);

    /// The stream failed before any result arrived
    fn generation_failed(&self, message: &str);

    /// A name was newly marked as disliked
    fn name_disliked(&self, name: &str);
}

/// Scoped clipboard access
#[mockall::automock]
pub trait ClipboardWriter: Send + Sync {
    /// Write one formatted summary to the system clipboard
    fn write_text(&self, text: &str) -> ClientResult<()>;
}
