//! HTTP client for fetching web pages

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Response};
use tracing::debug;

use crate::consumer::Fetch;
use crate::error::Result;

const DEFAULT_MAX_REDIRECTS: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024; // 10 MB

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Follow HTTP redirects
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum response body size in bytes.
    ///
    /// Responses larger than this will be truncated to prevent memory exhaustion.
    /// Default: 10 MB.
    pub max_body_size: usize,

    /// User-Agent header
    pub user_agent: String,

    /// Additional headers to send
    pub headers: Vec<(String, String)>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: format!(
                "opengraph-meta/{} (https://crates.io/crates/opengraph-meta)",
                env!("CARGO_PKG_VERSION")
            ),
            headers: Vec::new(),
        }
    }
}

impl HttpOptions {
    /// Create a new HttpOptions with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow redirects.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum response body size in bytes.
    ///
    /// Responses larger than this will be truncated.
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build a reqwest Client from these options.
    fn build_client(&self) -> Result<Client> {
        let redirect_policy = if self.follow_redirects {
            reqwest::redirect::Policy::limited(self.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                name.parse::<reqwest::header::HeaderName>(),
                value.parse::<reqwest::header::HeaderValue>(),
            ) {
                headers.insert(name, value);
            }
        }

        let client = Client::builder()
            .redirect(redirect_policy)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(client)
    }
}

/// [`Fetch`] implementation backed by reqwest.
///
/// A single GET request per call; transport failures surface as
/// [`Error::Http`](crate::Error::Http). The status code is not inspected.
///
/// # Example
///
/// ```rust,no_run
/// use opengraph_meta::{Consumer, HttpFetcher};
///
/// #[tokio::main]
/// async fn main() -> opengraph_meta::Result<()> {
///     let consumer = Consumer::with_client(HttpFetcher::new()?);
///     let object = consumer.load_url("https://example.org").await?;
///     println!("Title: {:?}", object.title);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_size: usize,
}

impl HttpFetcher {
    /// Create a fetcher with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(HttpOptions::default())
    }

    /// Create a fetcher with custom options.
    pub fn with_options(options: HttpOptions) -> Result<Self> {
        Ok(Self {
            client: options.build_client()?,
            max_body_size: options.max_body_size,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        debug!(url, status = response.status().as_u16(), "fetched document");
        read_body(response, self.max_body_size).await
    }
}

/// Read a response body, stopping once `max_body_size` bytes have arrived.
async fn read_body(response: Response, max_body_size: usize) -> Result<Vec<u8>> {
    let content_length = response.content_length().unwrap_or(0) as usize;
    let capacity = content_length.min(max_body_size).min(1024 * 1024); // Cap initial alloc at 1MB
    let mut bytes = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let remaining = max_body_size.saturating_sub(bytes.len());
        if remaining == 0 {
            break;
        }
        let to_take = chunk.len().min(remaining);
        bytes.extend_from_slice(&chunk[..to_take]);
        if to_take < chunk.len() {
            debug!(max_body_size, "response body truncated");
            break;
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HttpOptions::default();
        assert!(options.follow_redirects);
        assert_eq!(options.max_redirects, DEFAULT_MAX_REDIRECTS);
        assert_eq!(options.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(options.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert!(options.user_agent.contains("opengraph-meta"));
    }

    #[test]
    fn test_builder_pattern() {
        let options = HttpOptions::new()
            .follow_redirects(false)
            .max_redirects(5)
            .timeout(Duration::from_secs(60))
            .max_body_size(1024)
            .user_agent("Custom Agent")
            .header("X-Custom", "Value");

        assert!(!options.follow_redirects);
        assert_eq!(options.max_redirects, 5);
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.max_body_size, 1024);
        assert_eq!(options.user_agent, "Custom Agent");
        assert_eq!(options.headers.len(), 1);
    }

    #[test]
    fn test_fetcher_builds_from_options() {
        let fetcher = HttpFetcher::with_options(HttpOptions::new().max_body_size(16)).unwrap();
        assert_eq!(fetcher.max_body_size, 16);
    }
}
