//! End-to-end tests for the 401 refresh-and-replay flow, run against a
//! scripted in-process HTTP responder.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use backoffice_core::errors::Error;
use backoffice_core::session::{HelloResponse, MemoryTokenStore, TokenPair, TokenStore};

use crate::client::{ApiClient, ApiConfig};

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

async fn handle(mut socket: TcpStream, log: Arc<Mutex<Vec<String>>>, response: String) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos;
        }
    };

    let header = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = header
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    while buf.len() < header_end + 4 + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request_line = header.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();
    let auth = header
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("authorization")
                .then(|| value.trim().to_string())
        })
        .unwrap_or_else(|| "-".to_string());
    log.lock()
        .unwrap()
        .push(format!("{} {} {}", method, path, auth));

    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();
}

/// Serves one scripted response per incoming connection, in order.
async fn serve(responses: Vec<String>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));
    let task_log = log.clone();
    tokio::spawn(async move {
        for response in responses {
            let (socket, _) = listener.accept().await.unwrap();
            handle(socket, task_log.clone(), response).await;
        }
    });
    (format!("http://{}", addr), log)
}

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
    }
}

fn client(base_url: &str, tokens: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(ApiConfig::new(base_url), tokens).unwrap()
}

const HELLO_BODY: &str = r#"{"message": "hello", "email": "admin@example.com"}"#;
const FRESH_TOKENS_BODY: &str =
    r#"{"accessToken": "fresh-access", "refreshToken": "fresh-refresh"}"#;

#[tokio::test]
async fn test_successful_request_is_not_replayed() {
    let (base_url, log) = serve(vec![http_response("200 OK", HELLO_BODY)]).await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(pair("a1", "r1")));
    let client = client(&base_url, tokens);

    let hello: HelloResponse = client.get_json("/api/v1/auth/hello").await.unwrap();
    assert_eq!(hello.message, "hello");

    let requests = log.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec!["GET /api/v1/auth/hello Bearer a1".to_string()]
    );
}

#[tokio::test]
async fn test_401_refreshes_and_replays_with_the_new_token() {
    let (base_url, log) = serve(vec![
        http_response("401 Unauthorized", ""),
        http_response("200 OK", FRESH_TOKENS_BODY),
        http_response("200 OK", HELLO_BODY),
    ])
    .await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(pair("stale-access", "r1")));
    let client = client(&base_url, tokens.clone());

    let hello: HelloResponse = client.get_json("/api/v1/auth/hello").await.unwrap();
    assert_eq!(hello.email.as_deref(), Some("admin@example.com"));
    assert_eq!(
        tokens.get().unwrap(),
        Some(pair("fresh-access", "fresh-refresh"))
    );

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0], "GET /api/v1/auth/hello Bearer stale-access");
    // The refresh itself carries no bearer header.
    assert_eq!(requests[1], "POST /api/v1/auth/refresh -");
    assert_eq!(requests[2], "GET /api/v1/auth/hello Bearer fresh-access");
}

#[tokio::test]
async fn test_rejected_refresh_expires_the_session_and_keeps_tokens() {
    let (base_url, log) = serve(vec![
        http_response("401 Unauthorized", ""),
        http_response("401 Unauthorized", r#"{"message": "refresh token revoked"}"#),
    ])
    .await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(pair("stale-access", "r1")));
    let client = client(&base_url, tokens.clone());

    let err = client
        .get_json::<HelloResponse>("/api/v1/auth/hello")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SessionExpired));

    // A failed refresh never clears the store; only logout does.
    assert_eq!(tokens.get().unwrap(), Some(pair("stale-access", "r1")));
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_second_401_after_refresh_expires_the_session() {
    let (base_url, log) = serve(vec![
        http_response("401 Unauthorized", ""),
        http_response("200 OK", FRESH_TOKENS_BODY),
        http_response("401 Unauthorized", ""),
    ])
    .await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(pair("stale-access", "r1")));
    let client = client(&base_url, tokens.clone());

    let err = client
        .get_json::<HelloResponse>("/api/v1/auth/hello")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SessionExpired));
    assert_eq!(log.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_request_without_a_session_fails_without_a_refresh_attempt() {
    let (base_url, log) = serve(vec![http_response("401 Unauthorized", "")]).await;
    let client = client(&base_url, Arc::new(MemoryTokenStore::new()));

    let err = client
        .get_json::<HelloResponse>("/api/v1/auth/hello")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SessionExpired));
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_refreshes_coalesce_into_one_post() {
    let (base_url, log) = serve(vec![http_response("200 OK", FRESH_TOKENS_BODY)]).await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(pair("stale-access", "r1")));
    let client = Arc::new(client(&base_url, tokens.clone()));

    // Both callers observed a 401 on the same stale access token. Whichever
    // reaches the gate second finds the token already rotated and skips.
    let first = client.clone();
    let second = client.clone();
    let (a, b) = tokio::join!(
        async move { first.refresh_session(Some("stale-access")).await },
        async move { second.refresh_session(Some("stale-access")).await },
    );
    a.unwrap();
    b.unwrap();

    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(
        tokens.get().unwrap(),
        Some(pair("fresh-access", "fresh-refresh"))
    );
}

#[tokio::test]
async fn test_server_error_message_reaches_the_caller() {
    let (base_url, _log) = serve(vec![http_response(
        "400 Bad Request",
        r#"{"message": "category name already in use"}"#,
    )])
    .await;
    let client = client(&base_url, Arc::new(MemoryTokenStore::new()));

    let err = client
        .get_json::<HelloResponse>("/api/v1/categories")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("category name already in use"));
}
