//! HTTP exchange value types and the injected transport trait.

use super::TransportError;

/// The fully-built outgoing message handed to the transport.
///
/// This is a value type constructed by the dispatcher from a
/// [`Request`](super::Request) descriptor. It uses standard `http` crate
/// types for method and headers, ensuring compatibility with the broader
/// ecosystem, and is what hooks observe after the exchange completes.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL, already composed and query-encoded
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Request body; empty for body-less calls
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a new request with the given method and URL.
    ///
    /// Headers start empty and the body starts empty.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Sets a header, replacing any previous value under the same name.
    ///
    /// Replacement (rather than append) is what lets explicit headers
    /// override computed defaults such as `Content-Type`.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// An HTTP response received from the server.
///
/// The body is fully buffered into memory; on non-2xx statuses it is kept
/// verbatim as diagnostic bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for executing one HTTP exchange.
///
/// The dispatcher never talks to the network directly; it hands the built
/// [`HttpRequest`] to an injected implementation of this trait. That keeps
/// the pipeline testable with mock transports and lets callers own
/// connection pooling, deadlines, and cancellation entirely.
///
/// # Example
///
/// ```ignore
/// use wacloud::http::{HttpClient, HttpRequest, HttpResponse, TransportError};
///
/// struct MockTransport {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockTransport {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Executes the exchange and returns the received response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - the connection fails ([`TransportError::Connection`])
    /// - the deadline expires or the call is cancelled ([`TransportError::Timeout`])
    /// - the underlying client rejects the request ([`TransportError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
