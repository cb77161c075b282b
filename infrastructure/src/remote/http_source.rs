//! HTTP adapter for the [`RemoteQuoteSource`] port
//!
//! Talks to a JSONPlaceholder-style posts endpoint:
//!
//! - `fetch_batch`: `GET <endpoint>?_limit=<n>` returning `[{ "id", "title", ... }]`
//! - `push_batch`: `POST <endpoint>` with the quote list as a JSON array

use async_trait::async_trait;
use quotebook_application::{RemoteError, RemoteQuoteSource};
use quotebook_domain::{QuoteRecord, RemotePost};
use std::time::Duration;
use tracing::debug;

/// Default server endpoint
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default number of posts requested per fetch
pub const DEFAULT_FETCH_LIMIT: usize = 5;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("quotebook/", env!("CARGO_PKG_VERSION"));

/// Remote quote source backed by `reqwest`
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
    fetch_limit: usize,
}

impl HttpQuoteSource {
    /// Create a source for `endpoint` with the given per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        })
    }

    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }
}

fn map_request_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else if e.is_decode() {
        RemoteError::InvalidResponse(e.to_string())
    } else {
        RemoteError::Connection(e.to_string())
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(RemoteError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl RemoteQuoteSource for HttpQuoteSource {
    async fn fetch_batch(&self) -> Result<Vec<RemotePost>, RemoteError> {
        debug!("GET {} (limit {})", self.endpoint, self.fetch_limit);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("_limit", self.fetch_limit)])
            .send()
            .await
            .map_err(map_request_error)?;
        check_status(&response)?;

        let posts: Vec<RemotePost> = response.json().await.map_err(map_request_error)?;
        debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn push_batch(&self, quotes: &[QuoteRecord]) -> Result<(), RemoteError> {
        debug!("POST {} ({} quotes)", self.endpoint, quotes.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(quotes)
            .send()
            .await
            .map_err(map_request_error)?;
        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and return the raw request head.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/posts", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    #[tokio::test]
    async fn test_fetch_batch_parses_posts() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"userId":1,"id":1,"title":"first","body":"x"},{"userId":1,"id":2,"title":"second","body":"y"}]"#,
        )
        .await;
        let source = HttpQuoteSource::new(url, DEFAULT_TIMEOUT)
            .unwrap()
            .with_fetch_limit(2);

        let posts = source.fetch_batch().await.unwrap();

        assert_eq!(
            posts,
            vec![RemotePost::new(1, "first"), RemotePost::new(2, "second")]
        );
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /posts?_limit=2 "));
    }

    #[tokio::test]
    async fn test_fetch_batch_http_error() {
        let (url, _server) = serve_once("503 Service Unavailable", "").await;
        let source = HttpQuoteSource::new(url, DEFAULT_TIMEOUT).unwrap();

        let result = source.fetch_batch().await;
        assert!(matches!(result, Err(RemoteError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_fetch_batch_invalid_body() {
        let (url, _server) = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let source = HttpQuoteSource::new(url, DEFAULT_TIMEOUT).unwrap();

        let result = source.fetch_batch().await;
        assert!(matches!(result, Err(RemoteError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_batch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/posts", listener.local_addr().unwrap());
        drop(listener);

        let source = HttpQuoteSource::new(url, DEFAULT_TIMEOUT).unwrap();
        let result = source.fetch_batch().await;
        assert!(matches!(result, Err(RemoteError::Connection(_))));
    }

    #[tokio::test]
    async fn test_fetch_batch_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/posts", listener.local_addr().unwrap());

        // Accept the connection but never answer
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let source = HttpQuoteSource::new(url, Duration::from_millis(200)).unwrap();
        let result = source.fetch_batch().await;
        assert!(matches!(result, Err(RemoteError::Timeout)));
    }

    #[test]
    fn test_defaults() {
        let source = HttpQuoteSource::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(source.fetch_limit, DEFAULT_FETCH_LIMIT);
    }
}
