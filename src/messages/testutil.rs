//! Shared fixtures for message operation tests.

use std::sync::Mutex;

use crate::http::{HttpClient, HttpRequest, HttpResponse, TransportError};

use super::Sender;

/// A canned send response with one resolved contact and one message id.
pub(super) const SENT_RESPONSE: &str = concat!(
    r#"{"messaging_product":"whatsapp","#,
    r#""contacts":[{"input":"+15551234567","wa_id":"15551234567"}],"#,
    r#""messages":[{"id":"wamid.abc123"}]}"#
);

pub(super) fn sender() -> Sender {
    Sender {
        base_url: "https://graph.example.com".to_string(),
        api_version: "v16.0".to_string(),
        phone_number_id: "224225226".to_string(),
        access_token: "token".to_string(),
    }
}

/// Mock transport recording every outgoing request and answering each
/// with the same configured response.
pub(super) struct CapturingClient {
    status: http::StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl CapturingClient {
    pub(super) fn respond(status: http::StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn message_sent() -> Self {
        Self::respond(http::StatusCode::OK, SENT_RESPONSE)
    }

    pub(super) fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for CapturingClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(
            self.status,
            http::HeaderMap::new(),
            self.body.clone(),
        ))
    }
}
