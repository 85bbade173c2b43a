//! Completion client tests against a one-shot local HTTP listener.
//!
//! The live test at the bottom calls the real endpoint and needs
//! `GEMINI_API_KEY` in the environment.
//!
//! Run with: `cargo test -p soom-gemini --test client -- --ignored`

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use soom_gemini::client::{Completion, CompletionService, GeminiClient};
use soom_gemini::config::GeminiConfig;
use soom_gemini::error::GeminiError;

/// What the stub saw: the request line and the body.
struct Captured {
    request_line: String,
    body: String,
}

/// Serve exactly one request with the given status line and body.
fn serve_once(
    status_line: &'static str,
    response_body: &'static str,
) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n\
             {response_body}",
            response_body.len()
        );
        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8(body).unwrap(),
        })
        .unwrap();
    });

    (base_url, rx)
}

fn config(base_url: String) -> GeminiConfig {
    GeminiConfig {
        api_key: Some("test-key".to_string()),
        model: "gemini-test".to_string(),
        base_url,
        timeout: Duration::from_secs(5),
    }
}

#[test]
fn missing_api_key_fails_before_any_request() {
    let config = GeminiConfig {
        api_key: Some("   ".to_string()),
        ..GeminiConfig::default()
    };

    assert!(matches!(GeminiClient::new(&config), Err(GeminiError::Config(_))));
}

#[test]
fn returns_first_candidate_text_and_sends_user_part() {
    let (base_url, rx) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"요약 결과"}]}}]}"#,
    );
    let client = GeminiClient::new(&config(base_url)).unwrap();

    let completion = client.complete("문진 요약").unwrap();
    assert_eq!(completion, Completion::Text("요약 결과".to_string()));

    let captured = rx.recv().unwrap();
    assert!(captured.request_line.starts_with(
        "POST /models/gemini-test:generateContent?key=test-key"
    ));
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["contents"][0]["role"], "user");
    assert_eq!(sent["contents"][0]["parts"][0]["text"], "문진 요약");
}

#[test]
fn rate_limit_status_is_an_upstream_error() {
    let (base_url, _rx) = serve_once(
        "429 Too Many Requests",
        r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#,
    );
    let client = GeminiClient::new(&config(base_url)).unwrap();

    match client.complete("요청") {
        Err(GeminiError::Upstream { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn missing_candidate_text_is_empty_not_an_error() {
    let (base_url, _rx) = serve_once("200 OK", r#"{"candidates":[]}"#);
    let client = GeminiClient::new(&config(base_url)).unwrap();

    assert_eq!(client.complete("요청").unwrap(), Completion::Empty);
}

#[test]
fn unreadable_success_envelope_is_an_upstream_error() {
    let (base_url, _rx) = serve_once("200 OK", "<html>gateway page</html>");
    let client = GeminiClient::new(&config(base_url)).unwrap();

    match client.complete("요청") {
        Err(GeminiError::Upstream { status, body }) => {
            assert_eq!(status, 200);
            assert!(body.contains("<html>gateway page</html>"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = GeminiClient::new(&config(format!("http://127.0.0.1:{port}"))).unwrap();

    assert!(matches!(client.complete("요청"), Err(GeminiError::Transport(_))));
}

#[test]
#[ignore]
fn live_completion_returns_text() {
    let config = GeminiConfig::from_env().expect("config from env");
    let client = GeminiClient::new(&config).expect("GEMINI_API_KEY must be set");

    let completion = client
        .complete("한 단어로 답하라: 하늘은 무슨 색인가?")
        .expect("live completion should succeed");

    println!("{completion:?}");
    assert!(matches!(completion, Completion::Text(_)));
}
