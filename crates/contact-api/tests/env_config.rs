//! Runs the `contact-api` binary with configuration coming only from the
//! environment.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Kills the server when the test ends, pass or fail.
struct Server {
    child: Child,
    addr: SocketAddr,
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn spawn_server(strict_email: &str) -> Server {
    let port = free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_contact-api"))
        .env_clear()
        .env("CONTACT_STORE", "memory")
        .env("CONTACT_API_HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("CONTACT_STRICT_EMAIL", strict_email)
        .env("RUST_LOG", "warn")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("contact-api binary should start");
    let server = Server {
        child,
        addr: SocketAddr::from(([127, 0, 0, 1], port)),
    };

    for _ in 0..100 {
        if let Ok(response) = request(server.addr, "GET", "/api/health", None).await {
            if response.starts_with("HTTP/1.1 200") {
                return server;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("contact-api did not become healthy on {}", server.addr);
}

async fn request(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> std::io::Result<String> {
    let mut stream = TcpStream::connect(addr).await?;
    let body = body.unwrap_or("");
    let head = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes()).await?;
    stream.write_all(body.as_bytes()).await?;
    let mut response = String::new();
    stream.read_to_string(&mut response).await?;
    Ok(response)
}

const BAD_EMAIL: &str = r#"{"name":"Jane","email":"not-an-email","message":"hi"}"#;

#[tokio::test]
async fn test_strict_email_enabled_by_numeric_env() {
    let server = spawn_server("1").await;

    let response = request(server.addr, "POST", "/api/contact", Some(BAD_EMAIL))
        .await
        .unwrap();

    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    assert!(response.contains("Please provide name, email, and message"));
}

#[tokio::test]
async fn test_strict_email_disabled_by_word_env() {
    let server = spawn_server("no").await;

    let response = request(server.addr, "POST", "/api/contact", Some(BAD_EMAIL))
        .await
        .unwrap();

    assert!(response.starts_with("HTTP/1.1 201"), "{response}");
    assert!(response.contains("Message sent successfully"));
}

#[tokio::test]
async fn test_port_and_host_come_from_env() {
    let server = spawn_server("false").await;

    let response = request(server.addr, "GET", "/api/health", None).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""status":"OK""#));
}
