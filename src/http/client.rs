//! Production transport implementation using reqwest.

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Production transport backed by `reqwest::Client`.
///
/// A thin adapter that implements [`HttpClient`]. Connection pooling and
/// deadlines belong to the wrapped client; configure them there (for
/// example with `reqwest::Client::builder().timeout(..)`) and this layer
/// will surface expiry as [`TransportError::Timeout`].
///
/// # Example
///
/// ```no_run
/// use wacloud::http::ReqwestClient;
///
/// let client = ReqwestClient::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a transport with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wraps an existing reqwest client.
    ///
    /// Useful when you need custom timeouts, proxies, or TLS settings.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if !req.body.is_empty() {
            builder = builder.body(req.body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_builder() {
                TransportError::InvalidUrl(e.to_string())
            } else {
                TransportError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
