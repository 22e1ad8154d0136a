//! Client library for the name suggestion system
//!
//! Owns the form-to-stream-to-render pipeline: form normalization, the
//! streaming result controller, server-sent-event consumption, dislike
//! tracking, file import, and clipboard formatting.

pub mod controller;
pub mod error;
pub mod form;
pub mod services;
pub mod sse;
pub mod traits;
pub mod types;

// Re-export main types
pub use controller::ResultController;
pub use error::{ClientError, ClientResult};
pub use types::{FormValues, RequestPhase, StreamEvent};

// Re-export trait definitions
pub use traits::{ClipboardWriter, ResultView, StreamOpener};

// Re-export service implementations
pub use services::{RealClipboardWriter, RealResultView, RealStreamOpener};
