//! Stream consumption over HTTP
//!
//! Opens the generation endpoint's server-sent-event stream and bridges its
//! frames into a channel of [`StreamEvent`]s. The reader task lives exactly
//! as long as the receiving side: once the controller drops its receiver,
//! the next send fails and the task exits, dropping the HTTP response and
//! with it the connection.

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::sse::{SseDecoder, SseFrame};
use crate::traits::StreamOpener;
use crate::types::StreamEvent;
use shared::{DONE_EVENT, ERROR_EVENT, GenerationRequest, NameResult, ProcessId};

/// Real stream opener consuming the endpoint over reqwest
pub struct RealStreamOpener {
    client: reqwest::Client,
    base_url: Url,
}

impl RealStreamOpener {
    /// Create a new opener against an endpoint base URL
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Map one decoded frame onto a stream event.
    ///
    /// A message that fails to parse as [`NameResult`] is skipped and
    /// logged; the stream continues. Unknown named events are ignored.
    fn frame_to_event(frame: SseFrame) -> Option<StreamEvent> {
        match frame.event.as_deref() {
            Some(DONE_EVENT) => Some(StreamEvent::Done),
            Some(ERROR_EVENT) => Some(StreamEvent::Failed { message: frame.data }),
            Some(other) => {
                shared::process_debug!(ProcessId::current(), "Ignoring unknown event '{}'", other);
                None
            }
            None => match serde_json::from_str::<NameResult>(&frame.data) {
                Ok(result) => Some(StreamEvent::Name(result)),
                Err(e) => {
                    shared::process_warn!(
                        ProcessId::current(),
                        "Skipping malformed result message: {}",
                        e
                    );
                    None
                }
            },
        }
    }
}

#[async_trait]
impl StreamOpener for RealStreamOpener {
    async fn open(&self, request: &GenerationRequest) -> ClientResult<mpsc::Receiver<StreamEvent>> {
        let url = shared::stream_url(&self.base_url, request)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Stream {
                message: format!("generation endpoint returned HTTP {}", response.status()),
            });
        }

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(async move {
            let mut decoder = SseDecoder::new();
            let mut body = response.bytes_stream();

            while let Some(chunk) = body.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        let _ = tx.send(StreamEvent::Failed { message: e.to_string() }).await;
                        return;
                    }
                };

                for frame in decoder.push(&chunk) {
                    let Some(event) = Self::frame_to_event(frame) else {
                        continue;
                    };

                    let terminal = !matches!(event, StreamEvent::Name(_));
                    if tx.send(event).await.is_err() {
                        // Receiver dropped: superseded or disposed
                        shared::process_debug!(
                            ProcessId::current(),
                            "Reader detached, abandoning stream"
                        );
                        return;
                    }
                    if terminal {
                        return;
                    }
                }
            }

            // Body ended without a done event: the connection was dropped
            let _ = tx
                .send(StreamEvent::Failed {
                    message: "连接在完成前断开".to_string(),
                })
                .await;
        });

        Ok(rx)
    }
}
