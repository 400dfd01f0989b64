//! End-to-end tests over real sockets: bind an ephemeral port, serve, and
//! assert on the exact bytes a client receives.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use formtap::http::response::Response;
use formtap::http::writer::serialize_response;
use formtap::server::listener::Listener;

const CANNED: &[u8] = b"HTTP/1.1 200 OK\r\n\r\nOK";

async fn start_server(payload: Bytes) -> SocketAddr {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = listener.serve(payload).await;
    });

    addr
}

async fn send_request(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_canned_response_regardless_of_request() {
    let payload = serialize_response(&Response::ok_canned());
    let addr = start_server(payload).await;

    let requests: [&[u8]; 4] = [
        b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n",
        b"POST /login HTTP/1.1\r\n\r\nusername=alice&password=x",
        b"complete garbage, not HTTP at all",
        b"",
    ];

    for request in requests {
        let response = send_request(addr, request).await;
        assert_eq!(response, CANNED, "request {:?}", String::from_utf8_lossy(request));
    }
}

#[tokio::test]
async fn test_connections_served_sequentially() {
    let payload = serialize_response(&Response::ok_canned());
    let addr = start_server(payload).await;

    // First client connects but sends nothing: the server sits in its one
    // read and must not touch the second connection yet.
    let mut first = TcpStream::connect(addr).await.unwrap();

    let mut second = TcpStream::connect(addr).await.unwrap();
    second.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();

    let mut buf = [0u8; 64];
    let early = timeout(Duration::from_millis(200), second.read(&mut buf)).await;
    assert!(early.is_err(), "second connection served before first closed");

    // Closing the first client's write side ends its read; the server
    // responds, closes, and only then accepts the second connection.
    first.shutdown().await.unwrap();
    let mut response = Vec::new();
    first.read_to_end(&mut response).await.unwrap();
    assert_eq!(response, CANNED);

    let mut response = Vec::new();
    second.read_to_end(&mut response).await.unwrap();
    assert_eq!(response, CANNED);
}

#[tokio::test]
async fn test_json_file_mode_end_to_end() {
    let body = br#"{"users":["alice","bob"],"count":2}"#;
    let path: PathBuf = std::env::temp_dir()
        .join(format!("formtap_{}_e2e.json", std::process::id()));
    fs::write(&path, body).unwrap();

    let response = Response::json_file(&path).unwrap();
    fs::remove_file(&path).ok();

    let addr = start_server(serialize_response(&response)).await;
    let received = send_request(addr, b"GET /data HTTP/1.1\r\n\r\n").await;

    let expected = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        String::from_utf8_lossy(body)
    );
    assert_eq!(received, expected.as_bytes());
}

#[tokio::test]
async fn test_serving_loop_survives_many_connections() {
    let payload = serialize_response(&Response::ok_canned());
    let addr = start_server(payload).await;

    for i in 0..10 {
        let request = format!("POST / HTTP/1.1\r\n\r\nusername=user{i}&n={i}");
        let response = send_request(addr, request.as_bytes()).await;
        assert_eq!(response, CANNED);
    }
}
