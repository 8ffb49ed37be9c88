//! Error types for request construction and dispatch.

use thiserror::Error;

/// Error type for the injected transport.
///
/// Describes why an exchange never produced a response. Cancellation and
/// deadline expiry surface here as [`TransportError::Timeout`]; the core
/// never retries on its own.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request timed out or was cancelled before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// The underlying client rejected the request as malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for one dispatch.
///
/// Everything before [`RequestError::Transport`] is detected locally, with
/// no network call made and no partial side effects. None of these are
/// logged or retried here; callers decide what to do with them.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The base URL is empty or does not parse as an absolute URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending base URL, possibly empty
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The base URL parsed but its path cannot carry extra segments
    /// (e.g. a `mailto:` style cannot-be-a-base URL).
    #[error("Cannot compose request URL from '{url}'")]
    UrlComposition {
        /// The base URL whose path could not be extended
        url: String,
    },

    /// The payload could not be represented as JSON.
    #[error("Failed to encode request payload: {0}")]
    PayloadEncoding(#[source] serde_json::Error),

    /// A header name or value was not valid HTTP.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// Name of the offending header
        name: String,
    },

    /// A required field was missing when finalizing the request.
    #[error("Incomplete request: missing {field}")]
    IncompleteRequest {
        /// Dotted path of the missing field
        field: &'static str,
    },

    /// The transport failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    ///
    /// The raw body is preserved for caller inspection; no decoding into
    /// a target is attempted.
    #[error("Unexpected status {status}: {}", String::from_utf8_lossy(body))]
    UnexpectedStatus {
        /// The received status code
        status: http::StatusCode,
        /// The response body, verbatim
        body: Vec<u8>,
    },

    /// The response body was not valid JSON for the requested target.
    #[error("Failed to decode response body: {0}")]
    ResponseDecode(#[source] serde_json::Error),
}
