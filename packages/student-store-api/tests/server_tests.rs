//! End-to-end tests over a real TCP socket.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use student_store_api::config::ApiConfig;
use student_store_api::router::Router;
use student_store_api::server::serve_listener;
use student_store_core::StudentStore;

async fn start_server() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new(
        Arc::new(StudentStore::default()),
        Arc::new(ApiConfig::default()),
    )
    .unwrap();
    tokio::spawn(serve_listener(listener, Arc::new(router)));
    addr
}

async fn send(addr: std::net::SocketAddr, method: &str, path: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{} {} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        method,
        path,
        body.len(),
        body
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_create_and_fetch_over_http() {
    let addr = start_server().await;

    let response = send(
        addr,
        "POST",
        "/api/students",
        r#"{"name":"Juan","surname":"Perez","personalId":123456,"email":"a@b.com"}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 201"), "{}", response);
    assert!(response.contains("application/json"));

    let response = send(addr, "GET", "/api/students", "").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains(r#""count":1"#));

    let response = send(addr, "GET", "/api/students/unknown", "").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{}", response);
}
