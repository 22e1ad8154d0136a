//! Stream protocol contract between the client and the generation endpoint
//!
//! The endpoint emits zero or more unnamed `data:` events, each carrying one
//! JSON-encoded [`NameResult`](crate::types::NameResult), followed by exactly
//! one named `done` event. A named `error` event or a dropped connection
//! signals failure. Both sides import the constants from here so the framing
//! cannot drift.

use url::Url;

use crate::errors::{SharedError, SharedResult};
use crate::types::GenerationRequest;

/// Path of the server push stream
pub const STREAM_PATH: &str = "/api/generate-name/stream";

/// Query parameter holding the url-encoded JSON request
pub const PARAMS_PARAM: &str = "params";

/// Named event that terminates a successful stream
pub const DONE_EVENT: &str = "done";

/// Named event the server emits when generation fails mid-stream
pub const ERROR_EVENT: &str = "error";

/// Build the stream URL for one request against a base endpoint URL.
pub fn stream_url(base: &Url, request: &GenerationRequest) -> SharedResult<Url> {
    let payload = serde_json::to_string(request).map_err(|e| SharedError::SerializationError {
        message: e.to_string(),
    })?;

    let mut url = base
        .join(STREAM_PATH)
        .map_err(|e| SharedError::InvalidUrl { message: e.to_string() })?;
    url.query_pairs_mut().append_pair(PARAMS_PARAM, &payload);

    Ok(url)
}
