//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use proxy_dbg::commands::{self, Command, Context, Outcome};
use proxy_dbg::config::DbgConfig;
use proxy_dbg::error::DbgError;

/// A canned response for one request path.
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Start a mock control endpoint on an ephemeral port.
///
/// Paths not in `routes` answer 404.
pub async fn start_control_endpoint(routes: Vec<(&'static str, Route)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let routes = routes.clone();
                    tokio::spawn(async move {
                        let path = read_request_path(&mut socket).await;
                        let route = path
                            .as_deref()
                            .and_then(|p| routes.get(p).cloned())
                            .unwrap_or(Route {
                                status: 404,
                                body: "not found".into(),
                            });

                        let status_text = match route.status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            route.body.len(),
                            route.body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn read_request_path(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next()?;
    request_line.split_whitespace().nth(1).map(str::to_string)
}

/// A port with nothing listening on it.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Context pointing at `addr`, with `conf_path` for `conf`.
#[allow(dead_code)]
pub fn context(addr: SocketAddr, conf_path: PathBuf) -> Context {
    let mut config = DbgConfig::default();
    config.endpoint.base_url = format!("http://{}", addr);
    config.endpoint.timeout_secs = 2;
    config.nginx.conf_path = conf_path;
    Context::from_config(&config).unwrap()
}

/// Run a command and capture what it wrote.
#[allow(dead_code)]
pub async fn run_captured(
    command: Command,
    ctx: &Context,
) -> (Result<Outcome, DbgError>, String) {
    let mut out = Vec::new();
    let result = commands::run(&command, ctx, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}
