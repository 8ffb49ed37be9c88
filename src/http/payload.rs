//! Request payload variants and body extraction.

use serde::Serialize;
use serde_json::value::RawValue;

use super::RequestError;

/// A request body in one of its supported shapes.
///
/// Callers holding a pre-serialized body (for example hand-spliced JSON
/// text from the reply and media builders) wrap it as [`Payload::Bytes`]
/// or [`Payload::Text`]; typed values are serialized once at wrap time via
/// [`Payload::json`]. The dispatcher treats every shape uniformly and an
/// absent body is simply `Option::<Payload>::None`, so there is no
/// "unsupported payload" failure at extraction time.
#[derive(Debug, Clone)]
pub enum Payload {
    /// A pre-encoded body, sent unchanged.
    Bytes(Vec<u8>),
    /// Text sent as its raw UTF-8 bytes, without JSON quoting.
    Text(String),
    /// A JSON document, serialized when the payload was constructed.
    Json(Box<RawValue>),
}

impl Payload {
    /// Serializes `value` to JSON and wraps it.
    ///
    /// Serialization happens here, once, so field order follows the
    /// value's declaration order and a slice of records encodes as a
    /// JSON array preserving the original order.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::PayloadEncoding`] when `value` cannot be
    /// represented as JSON (for example a map with non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, RequestError> {
        let raw = serde_json::value::to_raw_value(value).map_err(RequestError::PayloadEncoding)?;
        Ok(Self::Json(raw))
    }

    /// Converts a payload, or its absence, into body bytes.
    ///
    /// An absent payload yields an empty body. JSON output is trimmed of
    /// any trailing newline so bodies are byte-exact regardless of
    /// encoder quirks.
    #[must_use]
    pub fn extract(payload: Option<&Self>) -> Vec<u8> {
        match payload {
            None => Vec::new(),
            Some(Self::Bytes(bytes)) => bytes.clone(),
            Some(Self::Text(text)) => text.as_bytes().to_vec(),
            Some(Self::Json(raw)) => raw.get().trim_end_matches('\n').as_bytes().to_vec(),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
