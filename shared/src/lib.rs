//! Shared types for the name suggestion system
//!
//! Contains the wire types exchanged between the webserver and the client,
//! the stream protocol constants, and common error/logging plumbing.
//! Component-internal types (form state, view rendering) are kept in their
//! respective components.

pub mod errors;
pub mod logging;
pub mod protocol;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the wire contract pieces both sides must agree on
pub use protocol::{DONE_EVENT, ERROR_EVENT, PARAMS_PARAM, STREAM_PATH, stream_url};
