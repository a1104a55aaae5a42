//! src/api/client.rs
//! ============================================================================
//! # Explorer backend client
//!
//! [`ExplorerApi`] is the seam between the navigator and the network: the
//! event loop only ever holds an `Arc<dyn ExplorerApi>`, and tests swap in a
//! scripted implementation. [`HttpExplorerApi`] is the reqwest-backed one.
//!
//! A response is accepted wholesale or not at all: transport errors, non-2xx
//! statuses and JSON decode failures all become the endpoint's fetch error.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{config::BackendConfig, error::AppError, model::entry::DirectoryEntry};

/// Body of `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    #[serde(rename = "rootPath")]
    pub root_path: String,
}

#[async_trait]
pub trait ExplorerApi: Send + Sync + Debug {
    async fn fetch_config(&self) -> Result<RemoteConfig, AppError>;

    async fn browse(&self, path: &str) -> Result<Vec<DirectoryEntry>, AppError>;

    async fn search(&self, query: &str, scope: &str) -> Result<Vec<DirectoryEntry>, AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpExplorerApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpExplorerApi {
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config_url(&self) -> String {
        format!("{}/api/config", self.base_url)
    }

    pub fn browse_url(&self, path: &str) -> String {
        format!(
            "{}/api/browse?path={}",
            self.base_url,
            urlencoding::encode(path)
        )
    }

    pub fn search_url(&self, query: &str, scope: &str) -> String {
        format!(
            "{}/api/search?q={}&path={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(scope)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| format!("Parse error: {e}"))
    }
}

#[async_trait]
impl ExplorerApi for HttpExplorerApi {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_config(&self) -> Result<RemoteConfig, AppError> {
        self.get_json(&self.config_url())
            .await
            .map_err(AppError::config_fetch)
    }

    #[instrument(level = "debug", skip(self))]
    async fn browse(&self, path: &str) -> Result<Vec<DirectoryEntry>, AppError> {
        let entries: Vec<DirectoryEntry> = self
            .get_json(&self.browse_url(path))
            .await
            .map_err(|reason| AppError::browse_fetch(path, reason))?;

        debug!("Browse {} returned {} entries", path, entries.len());
        Ok(entries)
    }

    #[instrument(level = "debug", skip(self))]
    async fn search(&self, query: &str, scope: &str) -> Result<Vec<DirectoryEntry>, AppError> {
        let entries: Vec<DirectoryEntry> = self
            .get_json(&self.search_url(query, scope))
            .await
            .map_err(|reason| AppError::search_fetch(query, scope, reason))?;

        debug!("Search {:?} in {} returned {} hits", query, scope, entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn api_for(base_url: &str) -> HttpExplorerApi {
        HttpExplorerApi::new(&BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        })
        .unwrap()
    }

    /// Serves one canned HTTP response and hands back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn urls_are_percent_encoded() {
        let api = api_for("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(
            api.browse_url("/docs/my files"),
            "http://localhost:8080/api/browse?path=%2Fdocs%2Fmy%20files"
        );
        assert_eq!(
            api.search_url("a&b", "/docs"),
            "http://localhost:8080/api/search?q=a%26b&path=%2Fdocs"
        );
        assert_eq!(api.config_url(), "http://localhost:8080/api/config");
    }

    #[tokio::test]
    async fn browse_decodes_listing() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"name":"a.txt","path":"/docs/a.txt","type":"file","size":"1.00 KB","last_modified":"2024-01-01 00:00:00"}]"#,
        )
        .await;

        let entries = api_for(&base).browse("/docs").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.txt");

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /api/browse?path=%2Fdocs HTTP/1.1");
    }

    #[tokio::test]
    async fn non_success_status_is_a_browse_failure() {
        let (base, _server) = serve_once("404 Not Found", r#"{"error":"Path not found"}"#).await;

        let err = api_for(&base).browse("/missing").await.unwrap_err();
        match err {
            AppError::BrowseFetch { path, reason } => {
                assert_eq!(path, "/missing");
                assert!(reason.contains("404"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_config_failure() {
        let (base, _server) = serve_once("200 OK", r#"{"root":"/x"}"#).await;

        let err = api_for(&base).fetch_config().await.unwrap_err();
        assert!(matches!(err, AppError::ConfigFetch { .. }));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_search_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api_for(&format!("http://{addr}"))
            .search("report", "/docs")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SearchFetch { .. }));
    }
}
