//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use relay_demo::config::{EdgeServiceConfig, InnerServiceConfig};
use relay_demo::lifecycle::Shutdown;

/// A running service; dropping it stops the server.
pub struct Running {
    pub addr: SocketAddr,
    _shutdown: Shutdown,
}

impl Running {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start an inner service on an ephemeral port.
pub async fn spawn_inner(probability: f64) -> Running {
    let mut config = InnerServiceConfig::default();
    config.failure.probability = probability;

    let server = relay_demo::inner::server(&config).unwrap();
    serve(server).await
}

/// Start an edge service pointing at `inner_url`.
pub async fn spawn_edge(inner_url: &str) -> Running {
    let mut config = EdgeServiceConfig::default();
    config.inner_service.url = Some(inner_url.to_string());
    spawn_edge_with(config).await
}

/// Start an edge service from a complete configuration.
pub async fn spawn_edge_with(config: EdgeServiceConfig) -> Running {
    let server = relay_demo::edge::server(&config).unwrap();
    serve(server).await
}

async fn serve(server: relay_demo::HttpServer) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    Running {
        addr,
        _shutdown: shutdown,
    }
}

/// An address nothing is listening on.
pub fn refused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start a programmable mock backend answering every request with `f()`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                read_request_head(&mut socket).await;
                let (status, body) = f().await;
                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    502 => "502 Bad Gateway",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

async fn read_request_head(socket: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}

/// Client that ignores any proxy configured in the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// `GET url`, returning status and body text.
pub async fn get(url: &str) -> (u16, String) {
    let response = client().get(url).send().await.expect("service unreachable");
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}
