//! Gateway tests against canned HTTP responses.
//!
//! Each test spins a one-shot TCP server that reads a single request and
//! answers with a fixed response, then asserts on what the gateway sent
//! and how it interpreted the answer.

use rasoi_core::auth::LoginRequest;
use rasoi_core::gateway::ApiGateway;
use rasoi_interaction::HttpApiGateway;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves exactly one request with a fixed response, delivering the raw
/// request text through the returned receiver.
async fn one_shot_server(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        let _ = tx.send(raw);
    });

    (format!("http://{}", addr), rx)
}

/// Reads headers plus a Content-Length-delimited body.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() - (pos + 4) >= content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn rejection_surfaces_server_detail_verbatim() {
    let (base_url, _rx) =
        one_shot_server("404 Not Found", r#"{"detail":"Not found"}"#).await;
    let gateway = HttpApiGateway::new(base_url);

    let err = gateway.get_preferences("tok").await.unwrap_err();
    assert_eq!(err.to_string(), "Not found");
    assert!(err.is_remote());
    assert!(err.is_not_found());
}

#[tokio::test]
async fn rejection_without_detail_falls_back_to_status_message() {
    let (base_url, _rx) = one_shot_server("500 Internal Server Error", "oops").await;
    let gateway = HttpApiGateway::new(base_url);

    let err = gateway.get_current_menu("tok").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn login_posts_credentials_and_parses_token() {
    let (base_url, rx) = one_shot_server(
        "200 OK",
        r#"{"access_token":"jwt-abc","token_type":"bearer"}"#,
    )
    .await;
    let gateway = HttpApiGateway::new(base_url);

    let token = gateway
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token.access_token, "jwt-abc");

    let raw = rx.await.unwrap();
    assert!(raw.starts_with("POST /login"));
    assert!(raw.contains(r#""username":"alice""#));
}

#[tokio::test]
async fn authenticated_calls_carry_bearer_header() {
    let (base_url, rx) = one_shot_server(
        "200 OK",
        r#"{"message":"This is protected data","user":"alice","user_id":1}"#,
    )
    .await;
    let gateway = HttpApiGateway::new(base_url);

    let data = gateway.get_protected("tok-123").await.unwrap();
    assert_eq!(data.user, "alice");

    let raw = rx.await.unwrap().to_lowercase();
    assert!(raw.contains("authorization: bearer tok-123"));
}

#[tokio::test]
async fn menu_history_unwraps_server_envelope() {
    let (base_url, rx) = one_shot_server(
        "200 OK",
        r#"{"menus":[{"id":2,"generated_at":"2025-01-06T08:00:00Z","is_active":true,"menu_preview":{"Monday":["Poha"]}},{"id":1,"generated_at":"2025-01-01T08:00:00Z","is_active":false,"menu_preview":{}}]}"#,
    )
    .await;
    let gateway = HttpApiGateway::new(base_url);

    let history = gateway.get_menu_history("tok", 10).await.unwrap();
    assert_eq!(history.len(), 2);
    // Server order is preserved as-is
    assert_eq!(history[0].id, 2);
    assert!(history[0].is_active);

    let raw = rx.await.unwrap();
    assert!(raw.starts_with("GET /menu-history?limit=10"));
}

#[tokio::test]
async fn generate_menu_defaults_to_empty_body() {
    let (base_url, rx) = one_shot_server(
        "200 OK",
        r#"{"menu":{"Monday":{"lunch":"Dal"}},"preferences_used":{},"generated_at":"2025-01-06T08:00:00Z","menu_id":3}"#,
    )
    .await;
    let gateway = HttpApiGateway::new(base_url);

    let menu = gateway.generate_menu("tok", None).await.unwrap();
    assert_eq!(menu.menu_id, Some(3));

    let raw = rx.await.unwrap();
    assert!(raw.starts_with("POST /generate-menu"));
    assert!(raw.trim_end().ends_with("{}"));
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    // Bind and immediately drop a listener so the port is closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpApiGateway::new(format!("http://{}", addr));
    let err = gateway.get_protected("tok").await.unwrap_err();
    assert!(err.is_network());
    assert!(!err.is_remote());
}

#[tokio::test]
async fn reserved_capabilities_fail_as_not_implemented() {
    // No server needed: the stubs must fail locally, before any request
    let gateway = HttpApiGateway::new("http://127.0.0.1:1");

    let err = gateway.generate_grocery_list("tok", 1).await.unwrap_err();
    assert!(err.is_not_implemented());

    let err = gateway.get_recipe_videos("tok", "Poha").await.unwrap_err();
    assert!(err.is_not_implemented());
    assert!(!err.is_network());
}
