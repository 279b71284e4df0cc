//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use food_dashboard::config::{RetryConfig, ServerConfig};
use food_dashboard::food::{FoodId, FoodPlate};
use food_dashboard::store::FoodStore;
use food_dashboard::{HttpFoodApi, HttpServer, Shutdown};

/// Start the real in-memory backend on an ephemeral port.
#[allow(dead_code)]
pub async fn start_food_api(foods: Vec<FoodPlate>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&ServerConfig::default(), FoodStore::with_foods(foods));
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Start a programmable backend: `f` picks the status and JSON body of every response.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    start_recording_backend(f).await.0
}

/// Like [`start_programmable_backend`], also keeping the lowercased header
/// block of every request it receives, in arrival order.
#[allow(dead_code)]
pub async fn start_recording_backend<F, Fut>(f: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let headers = read_request(&mut socket).await;
                recorded.lock().unwrap().push(headers);

                let (status, body) = f().await;
                let status_text = match status {
                    200 => "200 OK",
                    201 => "201 Created",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    502 => "502 Bad Gateway",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, requests)
}

/// Consume headers and body so closing the socket does not reset the
/// connection. Returns the lowercased header block.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return String::from_utf8_lossy(&buf).to_ascii_lowercase(),
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + content_length {
            return headers;
        }
    }
}

/// Value of `name` (lowercase) in a recorded header block.
#[allow(dead_code)]
pub fn header_value<'a>(headers: &'a str, name: &str) -> Option<&'a str> {
    headers.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Client for `addr` with short retry delays.
#[allow(dead_code)]
pub fn api_for(addr: SocketAddr) -> HttpFoodApi {
    let retries = RetryConfig {
        base_delay_ms: 10,
        max_delay_ms: 50,
        ..RetryConfig::default()
    };
    api_with_retries(addr, &retries)
}

/// Client for `addr` that ignores any proxy set in the environment.
#[allow(dead_code)]
pub fn api_with_retries(addr: SocketAddr, retries: &RetryConfig) -> HttpFoodApi {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpFoodApi::with_client(client, &format!("http://{}", addr), retries).unwrap()
}

#[allow(dead_code)]
pub fn plate(id: FoodId, name: &str, available: bool) -> FoodPlate {
    FoodPlate {
        id,
        name: name.into(),
        image: format!("https://example.com/food{}.png", id),
        price: "19.90".into(),
        description: format!("{} da casa", name),
        available,
    }
}
