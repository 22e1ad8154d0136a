//! Suggestion stream handler
//!
//! Serves `GET /api/generate-name/stream?params=<url-encoded JSON>` as a
//! server-sent-event stream: one unnamed `data:` event per suggestion, then
//! one named `done` event. Generation failures surface as a named `error`
//! event; a consumer that goes away simply closes the bridge channel.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::traits::NameGenerator;
use crate::webserver_impl::WebServer;
use shared::{GenerationRequest, ProcessId};

/// Pause between pushed suggestions, matching the pacing consumers expect
const RESULT_PACING: Duration = Duration::from_millis(100);

/// Query string of the stream endpoint
#[derive(Debug, Deserialize)]
pub struct StreamParams {
    /// URL-encoded JSON body of a [`GenerationRequest`]
    pub params: String,
}

/// Open one suggestion stream
pub async fn generate_name_stream<G>(
    State(server): State<WebServer<G>>,
    Query(query): Query<StreamParams>,
) -> Result<Sse<ReceiverStream<Result<Event, Infallible>>>, (StatusCode, String)>
where
    G: NameGenerator + 'static,
{
    let request: GenerationRequest = serde_json::from_str(&query.params)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("malformed params: {e}")))?;
    request
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    shared::process_info!(
        ProcessId::current(),
        "🌊 Opening suggestion stream (count={}, meanings={})",
        request.count,
        request.meanings.len()
    );

    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(16);
    let state = server.state();
    let generator = server.generator();
    state.stream_opened();

    tokio::spawn(async move {
        emit_stream(generator, request, tx).await;
        state.stream_closed();
    });

    Ok(Sse::new(ReceiverStream::new(rx)))
}

/// Generate suggestions and push them over the bridge channel
async fn emit_stream<G>(
    generator: Arc<G>,
    request: GenerationRequest,
    tx: mpsc::Sender<Result<Event, Infallible>>,
) where
    G: NameGenerator,
{
    match generator.generate(&request).await {
        Ok(names) => {
            let total = names.len();
            for name in names {
                let payload = match serde_json::to_string(&name) {
                    Ok(payload) => payload,
                    Err(e) => {
                        shared::process_warn!(
                            ProcessId::current(),
                            "Skipping unserializable suggestion: {}",
                            e
                        );
                        continue;
                    }
                };

                // A failed send means the consumer dropped the connection
                if tx.send(Ok(Event::default().data(payload))).await.is_err() {
                    shared::process_info!(ProcessId::current(), "📪 Client disconnected mid-stream");
                    return;
                }

                tokio::time::sleep(RESULT_PACING).await;
            }

            let done = Event::default().event(shared::DONE_EVENT).data("complete");
            if tx.send(Ok(done)).await.is_ok() {
                shared::process_info!(ProcessId::current(), "✅ Streamed {} suggestions", total);
            }
        }
        Err(e) => {
            shared::logging::log_error(ProcessId::current(), "Name generation", &e);
            let error = Event::default().event(shared::ERROR_EVENT).data(e.to_string());
            let _ = tx.send(Ok(error)).await;
        }
    }
}
