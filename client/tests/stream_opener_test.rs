//! Integration tests for the real stream opener
//!
//! Runs a scripted TCP server speaking just enough HTTP to serve one SSE
//! body, then checks the full chunk-decode-map pipeline end to end.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use client::{RealStreamOpener, StreamEvent, StreamOpener};
use shared::{Gender, GenerationRequest, NameLength, ProcessId};

fn request() -> GenerationRequest {
    GenerationRequest {
        gender: Some(Gender::Male),
        meanings: vec!["智慧聪颖".to_string()],
        cultural_source: vec!["诗经楚辞".to_string()],
        avoid_characters: vec![],
        avoid_sounds: vec![],
        count: 3,
        name_length: NameLength::Any,
        disliked_names: vec![],
    }
}

const RESULT_JSON: &str = r#"{"name":"明哲","gender":"male","meaning":["智慧聪颖"],"source":"尚书","explanation":"知人则哲"}"#;

/// Serve one scripted HTTP response and return the endpoint base URL
async fn scripted_server(status_line: &'static str, body: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the request head
        let mut head = Vec::new();
        let mut buffer = [0u8; 1024];
        loop {
            let n = socket.read(&mut buffer).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buffer[..n]);
            if head.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\ncontent-type: text/event-stream\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

async fn collect_events(base: Url) -> Vec<StreamEvent> {
    let opener = RealStreamOpener::new(base);
    let mut rx = opener.open(&request()).await.unwrap();

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_results_then_done() {
    ProcessId::init_client();

    let body = format!("data: {RESULT_JSON}\n\ndata: {RESULT_JSON}\n\nevent: done\ndata: complete\n\n");
    let base = scripted_server("HTTP/1.1 200 OK", body).await;

    let events = collect_events(base).await;

    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], StreamEvent::Name(result) if result.name == "明哲"));
    assert!(matches!(&events[1], StreamEvent::Name(_)));
    assert_eq!(events[2], StreamEvent::Done);
}

#[tokio::test]
async fn test_error_event_maps_to_failure() {
    ProcessId::init_client();

    let base = scripted_server("HTTP/1.1 200 OK", "event: error\ndata: boom\n\n".to_string()).await;
    let events = collect_events(base).await;

    assert_eq!(
        events,
        vec![StreamEvent::Failed { message: "boom".to_string() }]
    );
}

#[tokio::test]
async fn test_dropped_connection_maps_to_failure() {
    ProcessId::init_client();

    // Body ends without a done event
    let body = format!("data: {RESULT_JSON}\n\n");
    let base = scripted_server("HTTP/1.1 200 OK", body).await;

    let events = collect_events(base).await;

    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], StreamEvent::Name(_)));
    assert!(matches!(&events[1], StreamEvent::Failed { .. }));
}

#[tokio::test]
async fn test_malformed_messages_are_skipped() {
    ProcessId::init_client();

    let body = format!("data: not json\n\ndata: {RESULT_JSON}\n\nevent: done\ndata: complete\n\n");
    let base = scripted_server("HTTP/1.1 200 OK", body).await;

    let events = collect_events(base).await;

    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], StreamEvent::Name(_)));
    assert_eq!(events[1], StreamEvent::Done);
}

#[tokio::test]
async fn test_non_success_status_fails_open() {
    ProcessId::init_client();

    let base = scripted_server("HTTP/1.1 500 Internal Server Error", String::new()).await;

    let opener = RealStreamOpener::new(base);
    assert!(opener.open(&request()).await.is_err());
}
