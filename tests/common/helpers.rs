use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gdfetch::{Fetcher, FetcherBuilder, ShareLink};
use reqwest::Url;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// Common test constants
pub const TEST_ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz012345";
pub const TEST_SHARE_URL: &str =
    "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=drive_link";
pub const TEST_DISPOSITION: &str =
    "attachment; filename=\"report.pdf\"; filename*=UTF-8''report.pdf";

/// Canned response served by [`TestServer`].
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Keep the connection open after reading the request, without answering.
    pub stall: bool,
}

impl MockResponse {
    /// A `200 OK` for `body`, with matching size and disposition headers.
    pub fn file(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Length".to_string(), body.len().to_string()),
                ("Content-Disposition".to_string(), TEST_DISPOSITION.to_string()),
                ("Content-Type".to_string(), "application/octet-stream".to_string()),
            ],
            body,
            stall: false,
        }
    }

    /// A bodiless response with the given status.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            headers: vec![("Content-Length".to_string(), "0".to_string())],
            body: Vec::new(),
            stall: false,
        }
    }

    /// A response that never comes.
    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::status(200)
        }
    }

    /// Replace (or add) a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Drop a header.
    pub fn without_header(mut self, name: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self
    }
}

/// Minimal HTTP/1.1 server answering every request with the same response.
pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Bind to an ephemeral port and start serving in the background.
    pub async fn start(response: MockResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let response = response.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    handle(socket, response, log).await;
                });
            }
        });

        Self { addr, requests }
    }

    /// Endpoint to hand to [`FetcherBuilder::endpoint`].
    pub fn endpoint(&self) -> Url {
        Url::parse(&format!("http://{}/uc", self.addr)).expect("Invalid endpoint")
    }

    /// Request lines received so far, e.g. `GET /uc?... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("Poisoned request log").clone()
    }
}

async fn handle(mut socket: TcpStream, response: MockResponse, log: Arc<Mutex<Vec<String>>>) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&raw);
    let request_line = request.lines().next().unwrap_or_default().to_string();
    let is_head = request_line.starts_with("HEAD ");
    log.lock().expect("Poisoned request log").push(request_line);

    if response.stall {
        // Wait for the client to give up.
        let _ = socket.read(&mut buf).await;
        return;
    }

    let reason = match response.status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let mut head = format!("HTTP/1.1 {} {}\r\n", response.status, reason);
    for (name, value) in &response.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("Connection: close\r\n\r\n");

    let _ = socket.write_all(head.as_bytes()).await;
    if !is_head {
        let _ = socket.write_all(&response.body).await;
    }
    let _ = socket.shutdown().await;
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// The share-link every test fetches.
pub fn test_link() -> ShareLink {
    ShareLink::parse(TEST_SHARE_URL).expect("Invalid test share-link")
}

/// A quiet fetcher pointed at `server`, writing into `dir`.
pub fn create_test_fetcher(server: &TestServer, dir: &Path) -> Fetcher {
    configured_test_builder(server, dir)
        .build()
        .expect("Failed to build fetcher")
}

/// The builder behind [`create_test_fetcher`].
pub fn configured_test_builder(server: &TestServer, dir: &Path) -> FetcherBuilder {
    FetcherBuilder::hidden()
        .endpoint(server.endpoint())
        .directory(dir.to_path_buf())
}

/// Entries of `dir`.
pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Failed to read entry").path())
        .collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}
