use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use url::Url;

use crate::error::CorpusError;

/// How a resource may be served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// Any cached copy is acceptable.
    Cached,
    /// Force revalidation with the origin.
    Revalidate,
}

/// Fetches corpus resources (manifest and chunks) as text.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CorpusSource: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` for transport failures and non-success statuses.
    async fn fetch_text(&self, url: &Url, mode: FetchMode) -> Result<String, CorpusError>;
}

/// `CorpusSource` over HTTP (browser `fetch` on wasm32).
#[derive(Clone, Default)]
pub struct HttpCorpusSource {
    client: Client,
}

impl HttpCorpusSource {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CorpusSource for HttpCorpusSource {
    async fn fetch_text(&self, url: &Url, mode: FetchMode) -> Result<String, CorpusError> {
        let mut request = self.client.get(url.clone());
        if mode == FetchMode::Revalidate {
            request = request
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache");
        }

        let response = request.send().await.map_err(|source| CorpusError::Http {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(CorpusError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(|source| CorpusError::Http {
            url: url.to_string(),
            source,
        })
    }
}

/// In-memory `CorpusSource` keyed by absolute URL, for tests and bundled data.
///
/// Records every request so callers can assert fetch order and modes.
#[derive(Clone, Default)]
pub struct StaticCorpusSource {
    bodies: Arc<Mutex<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<(String, FetchMode)>>>,
}

impl StaticCorpusSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(self, url: &str, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&self, url: &str, body: impl Into<String>) {
        if let Ok(mut guard) = self.bodies.lock() {
            guard.insert(url.to_string(), body.into());
        }
    }

    /// Requests seen so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, FetchMode)> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CorpusSource for StaticCorpusSource {
    async fn fetch_text(&self, url: &Url, mode: FetchMode) -> Result<String, CorpusError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push((url.to_string(), mode));
        }
        self.bodies
            .lock()
            .ok()
            .and_then(|guard| guard.get(url.as_str()).cloned())
            .ok_or_else(|| CorpusError::Missing {
                url: url.to_string(),
            })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const MANIFEST: &str = r#"{"version":1,"chunks":[]}"#;

    /// Answers `connections` requests, one per connection, and returns each
    /// lowercased request head. Only the manifest path exists.
    async fn serve(listener: TcpListener, connections: usize) -> Vec<String> {
        let mut heads = Vec::new();
        for _ in 0..connections {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let head = String::from_utf8_lossy(&buf).to_ascii_lowercase();
            let response = if head.starts_with("get /data/manifest.json ") {
                format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{MANIFEST}",
                    MANIFEST.len()
                )
            } else {
                "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n".to_string()
            };
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            heads.push(head);
        }
        heads
    }

    #[tokio::test]
    async fn manifest_fetch_bypasses_caches_and_bad_status_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let root = Url::parse(&format!("http://{}/data/", listener.local_addr().unwrap())).unwrap();
        let server = tokio::spawn(serve(listener, 2));
        let source = HttpCorpusSource::new(Client::builder().no_proxy().build().unwrap());

        let manifest = root.join("manifest.json").unwrap();
        let body = source.fetch_text(&manifest, FetchMode::Revalidate).await.unwrap();
        assert_eq!(body, MANIFEST);

        let chunk = root.join("chunks/part-000.json").unwrap();
        let err = source.fetch_text(&chunk, FetchMode::Cached).await.unwrap_err();
        match err {
            CorpusError::HttpStatus { url, status } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(url, chunk.to_string());
            }
            other => panic!("expected status error, got {other:?}"),
        }

        let heads = server.await.unwrap();
        assert!(heads[0].contains("\r\ncache-control: no-cache\r\n"));
        assert!(heads[0].contains("\r\npragma: no-cache\r\n"));
        assert!(heads[1].starts_with("get /data/chunks/part-000.json "));
        assert!(!heads[1].contains("cache-control:"));
        assert!(!heads[1].contains("pragma:"));
    }
}
