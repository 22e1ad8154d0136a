//! Streaming result controller
//!
//! Owns the lifecycle of a single outstanding generation request: turns
//! submitted form values into a request, opens the push stream, accumulates
//! incoming suggestions in arrival order, and tears the stream down on
//! completion, error, superseding submit, or disposal.
//!
//! Every stream gets a monotonically increasing id; handlers ignore events
//! that do not belong to the current stream, so a superseded stream can
//! never append to the new result set even if transport buffering delivers
//! late messages. Dropping the controller drops the active receiver, which
//! detaches the reader task on any exit path.

use std::collections::BTreeSet;
use tokio::sync::mpsc;

use crate::error::ClientResult;
use crate::form;
use crate::traits::{ResultView, StreamOpener};
use crate::types::{FormValues, RequestPhase, StreamEvent};
use shared::{NameResult, ProcessId};

/// Handle of the single open stream
struct ActiveStream {
    id: u64,
    rx: mpsc::Receiver<StreamEvent>,
}

/// Controller for one view's generation requests
pub struct ResultController<S: StreamOpener, V: ResultView> {
    opener: S,
    view: V,
    phase: RequestPhase,
    results: Vec<NameResult>,
    disliked: BTreeSet<String>,
    active: Option<ActiveStream>,
    next_stream_id: u64,
}

impl<S: StreamOpener, V: ResultView> ResultController<S, V> {
    /// Create a new idle controller
    pub fn new(opener: S, view: V) -> Self {
        Self {
            opener,
            view,
            phase: RequestPhase::Idle,
            results: Vec::new(),
            disliked: BTreeSet::new(),
            active: None,
            next_stream_id: 1,
        }
    }

    /// Submit one generation request.
    ///
    /// Any previous stream is detached before the new one opens. On success
    /// the controller is Loading with an empty result set; on failure the
    /// error is reported through the view and also returned.
    pub async fn submit(&mut self, form: &FormValues) -> ClientResult<()> {
        // The superseded stream must be fully detached before the new one
        // opens; its late events are additionally fenced by the stream id.
        self.close_active();

        let request = match form::build_request(form, &self.disliked) {
            Ok(request) => request,
            Err(e) => {
                self.phase = RequestPhase::Failed;
                self.view.generation_failed(&e.to_string());
                return Err(e);
            }
        };

        self.results.clear();

        match self.opener.open(&request).await {
            Ok(rx) => {
                let id = self.next_stream_id;
                self.next_stream_id += 1;
                self.active = Some(ActiveStream { id, rx });
                self.phase = RequestPhase::Loading;
                shared::process_debug!(ProcessId::current(), "🌊 Stream {} opened", id);
                Ok(())
            }
            Err(e) => {
                self.phase = RequestPhase::Failed;
                self.view.generation_failed(&e.to_string());
                Err(e)
            }
        }
    }

    /// Pump stream events until the current request reaches a terminal
    /// phase (or the controller is disposed). Returns the final phase.
    pub async fn run_to_completion(&mut self) -> RequestPhase {
        loop {
            let Some(id) = self.active_stream_id() else {
                break;
            };

            let received = match self.active.as_mut() {
                Some(active) => active.rx.recv().await,
                None => break,
            };

            match received {
                Some(event) => {
                    self.on_event(id, event);
                    if !self.phase.is_loading() {
                        break;
                    }
                }
                // Channel closed without a terminal event: the connection
                // was dropped
                None => self.on_error(id, "连接在完成前断开"),
            }
        }
        self.phase
    }

    /// Dispatch one stream event to the matching handler
    pub fn on_event(&mut self, stream_id: u64, event: StreamEvent) {
        match event {
            StreamEvent::Name(result) => self.on_message(stream_id, result),
            StreamEvent::Done => self.on_done(stream_id),
            StreamEvent::Failed { message } => self.on_error(stream_id, &message),
        }
    }

    /// Append one pushed suggestion, preserving arrival order.
    /// No deduplication: a name pushed twice is listed twice.
    pub fn on_message(&mut self, stream_id: u64, result: NameResult) {
        if !self.is_current(stream_id) {
            shared::process_debug!(
                ProcessId::current(),
                "Ignoring message from superseded stream {}",
                stream_id
            );
            return;
        }

        self.view.name_received(&result);
        self.results.push(result);
    }

    /// The stream completed normally
    pub fn on_done(&mut self, stream_id: u64) {
        if !self.is_current(stream_id) {
            return;
        }

        self.active = None;
        self.phase = RequestPhase::Done;
        self.view.generation_succeeded(self.results.len());
    }

    /// The stream failed. A failure is reported only when no result has
    /// arrived; a partial result set is already usable output and the
    /// request ends as Done. This asymmetry is deliberate.
    pub fn on_error(&mut self, stream_id: u64, message: &str) {
        if !self.is_current(stream_id) {
            return;
        }

        self.active = None;
        if self.results.is_empty() {
            self.phase = RequestPhase::Failed;
            self.view.generation_failed(message);
        } else {
            shared::process_warn!(
                ProcessId::current(),
                "Stream ended early after {} results: {}",
                self.results.len(),
                message
            );
            self.phase = RequestPhase::Done;
        }
    }

    /// Flag a name as disliked. Idempotent; existing results are never
    /// removed or re-ranked. Returns whether the name was newly marked.
    pub fn mark_disliked(&mut self, name: &str) -> bool {
        let newly_marked = self.disliked.insert(name.to_string());
        if newly_marked {
            self.view.name_disliked(name);
        }
        newly_marked
    }

    /// Whether a name has been flagged already
    pub fn is_disliked(&self, name: &str) -> bool {
        self.disliked.contains(name)
    }

    /// Detach any open stream. Dropping the controller has the same
    /// effect; this exists for explicit teardown paths.
    pub fn dispose(&mut self) {
        self.close_active();
        if self.phase.is_loading() {
            self.phase = RequestPhase::Idle;
        }
    }

    /// Results of the current request, in arrival order
    pub fn results(&self) -> &[NameResult] {
        &self.results
    }

    /// Current request phase
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Names flagged as disliked this session
    pub fn disliked(&self) -> &BTreeSet<String> {
        &self.disliked
    }

    /// Id of the open stream, if any
    pub fn active_stream_id(&self) -> Option<u64> {
        self.active.as_ref().map(|active| active.id)
    }

    fn is_current(&self, stream_id: u64) -> bool {
        self.active_stream_id() == Some(stream_id)
    }

    fn close_active(&mut self) {
        if let Some(active) = self.active.take() {
            shared::process_debug!(ProcessId::current(), "🔌 Detached stream {}", active.id);
        }
    }
}
