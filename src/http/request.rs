//! Request descriptors and their builder.

use std::collections::BTreeMap;

use super::{Payload, RequestError};

/// Addressing for one call: where it goes and on whose behalf.
///
/// A context is constructed per call and discarded after dispatch; it
/// carries no cross-call state. Fragments left empty are simply omitted
/// from the composed URL.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Diagnostic label handed to hooks for logging and correlation.
    /// May be empty.
    pub name: String,
    /// Scheme and host of the API, e.g. `https://graph.facebook.com`.
    /// Required; an empty value fails the build.
    pub base_url: String,
    /// API version path segment, e.g. `v16.0`. Omitted when empty.
    pub api_version: String,
    /// Path segment identifying the acting resource, e.g. a phone number
    /// ID. Omitted when empty, for identifier-less endpoints.
    pub sender_id: String,
    /// Additional path segments, appended in order.
    pub endpoints: Vec<String>,
}

impl RequestContext {
    /// Creates a context for the given API host.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the acting-resource segment.
    #[must_use]
    pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = sender_id.into();
        self
    }

    /// Sets the trailing endpoint segments.
    #[must_use]
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }
}

/// A complete, immutable description of one API call.
///
/// Built through [`RequestBuilder`] and consumed by the dispatcher.
/// Header, query, and form maps are ordered so URL and body encoding are
/// deterministic for a fixed input. A non-empty `form` takes precedence
/// over `payload` when the body is constructed.
#[derive(Debug, Clone)]
pub struct Request {
    /// Where the call goes and its diagnostic name
    pub context: RequestContext,
    /// HTTP method; defaults to POST when not set on the builder
    pub method: http::Method,
    /// Explicit headers; these override computed defaults such as
    /// `Content-Type`
    pub headers: BTreeMap<String, String>,
    /// Query parameters appended to the composed URL
    pub query: BTreeMap<String, String>,
    /// Bearer token; when non-empty it is injected as
    /// `Authorization: Bearer <token>`
    pub bearer: String,
    /// Form fields; when non-empty the body is form-encoded from these
    pub form: BTreeMap<String, String>,
    /// Request body, when neither absent nor form-encoded
    pub payload: Option<Payload>,
}

impl Request {
    /// Starts building a request.
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }
}

/// Builder assembling a [`Request`] from named options.
///
/// Setters for distinct fields are order-independent; setting the same
/// field twice is last-write-wins. [`RequestBuilder::build`] is the only
/// step that can fail, and only on missing required fields.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    context: RequestContext,
    method: Option<http::Method>,
    headers: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    bearer: String,
    form: BTreeMap<String, String>,
    payload: Option<Payload>,
}

impl RequestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request context.
    #[must_use]
    pub fn context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: http::Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets one header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Sets one query parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = token.into();
        self
    }

    /// Replaces all form fields.
    #[must_use]
    pub fn form(mut self, form: BTreeMap<String, String>) -> Self {
        self.form = form;
        self
    }

    /// Sets one form field.
    #[must_use]
    pub fn form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }

    /// Sets the request payload.
    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Finalizes the request.
    ///
    /// The method defaults to POST when unset, mirroring the common case
    /// where most Cloud API calls are mutations.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::IncompleteRequest`] when the context's
    /// base URL is empty.
    pub fn build(self) -> Result<Request, RequestError> {
        if self.context.base_url.is_empty() {
            return Err(RequestError::IncompleteRequest {
                field: "context.base_url",
            });
        }

        Ok(Request {
            context: self.context,
            method: self.method.unwrap_or(http::Method::POST),
            headers: self.headers,
            query: self.query,
            bearer: self.bearer,
            form: self.form,
            payload: self.payload,
        })
    }
}
