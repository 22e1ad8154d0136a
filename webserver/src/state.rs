//! Webserver state management

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state shared across handlers
#[derive(Debug)]
pub struct WebServerState {
    pub server_start_time: Instant,
    streams_started: AtomicU64,
    active_streams: AtomicU32,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new() -> Self {
        Self {
            server_start_time: Instant::now(),
            streams_started: AtomicU64::new(0),
            active_streams: AtomicU32::new(0),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Record a newly opened stream
    pub fn stream_opened(&self) -> u64 {
        self.active_streams.fetch_add(1, Ordering::Relaxed);
        self.streams_started.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record a stream that finished, failed, or was abandoned
    pub fn stream_closed(&self) {
        self.active_streams.fetch_sub(1, Ordering::Relaxed);
    }

    /// Total streams opened since startup
    pub fn get_streams_started(&self) -> u64 {
        self.streams_started.load(Ordering::Relaxed)
    }

    /// Streams currently open
    pub fn get_active_streams(&self) -> u32 {
        self.active_streams.load(Ordering::Relaxed)
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_empty() {
        let state = WebServerState::new();

        assert_eq!(state.get_streams_started(), 0);
        assert_eq!(state.get_active_streams(), 0);
    }

    #[test]
    fn test_stream_counters() {
        let state = WebServerState::new();

        assert_eq!(state.stream_opened(), 1);
        assert_eq!(state.stream_opened(), 2);
        assert_eq!(state.get_active_streams(), 2);

        state.stream_closed();
        assert_eq!(state.get_active_streams(), 1);
        // Started count never decreases
        assert_eq!(state.get_streams_started(), 2);
    }
}
