//! Message operations built on the generic dispatch core.
//!
//! Every operation here assembles a business payload, describes the call
//! with a [`Request`](crate::http::Request), and hands it to the
//! dispatcher:
//! - [`send_text`], [`send_location`], [`react`], [`send_contact`],
//!   [`send_template`] — typed [`Message`](crate::models::Message)
//!   payloads, serialized generically
//! - [`send_media`], [`reply`] — hand-spliced JSON bodies sent as raw
//!   bytes
//! - [`mark_message_read`] — the read-receipt status update

mod contact;
mod location;
mod media;
mod reaction;
mod read;
mod reply;
mod response;
mod template;
mod text;

#[cfg(test)]
mod media_tests;
#[cfg(test)]
mod testutil;

pub use contact::{SendContactRequest, send_contact};
pub use location::{SendLocationRequest, send_location};
pub use media::{CacheOptions, MediaType, SendMediaRequest, build_media_payload, send_media};
pub use reaction::{ReactRequest, react};
pub use read::{MarkMessageReadRequest, mark_message_read};
pub use reply::{MessageType, Reply, build_reply_payload, reply};
pub use response::{MessageId, MessageResponse, ResponseContact, StatusResponse};
pub use template::{SendTemplateRequest, send_template};
pub use text::{SendTextRequest, send_text};

use std::collections::BTreeMap;

use crate::http::{
    HttpClient, Payload, Request, RequestContext, RequestError, execute_json,
};

/// The account and API coordinates shared by every message operation.
///
/// All fields address the same acting resource: which API host and
/// version to call, which phone number sends, and the credential to use.
#[derive(Debug, Clone, Default)]
pub struct Sender {
    /// Scheme and host, e.g. `https://graph.facebook.com`
    pub base_url: String,
    /// API version segment, e.g. `v16.0`
    pub api_version: String,
    /// Phone number ID acting as the message source
    pub phone_number_id: String,
    /// Bearer credential for the call
    pub access_token: String,
}

impl Sender {
    /// Builds the request context for the `messages` endpoint.
    fn context(&self, name: &str) -> RequestContext {
        RequestContext::new(name, self.base_url.as_str())
            .with_api_version(self.api_version.as_str())
            .with_sender_id(self.phone_number_id.as_str())
            .with_endpoints(["messages"])
    }
}

/// Dispatches one message payload and decodes the send response.
pub(crate) async fn dispatch_payload<C: HttpClient>(
    client: &C,
    sender: &Sender,
    name: &str,
    headers: BTreeMap<String, String>,
    payload: Payload,
) -> Result<MessageResponse, RequestError> {
    let request = Request::builder()
        .context(sender.context(name))
        .method(http::Method::POST)
        .headers(headers)
        .header("Content-Type", "application/json")
        .bearer(sender.access_token.as_str())
        .payload(payload)
        .build()?;

    execute_json(client, &request, &[]).await
}
