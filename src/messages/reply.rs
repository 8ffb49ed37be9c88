//! Replying to a previous message in a conversation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::http::{HttpClient, Payload, RequestError};

use super::{MessageResponse, Sender};

/// Content kind carried by a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Text,
    Location,
    Reaction,
    Template,
}

impl MessageType {
    /// The wire value used as both the `type` field and the payload key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Location => "location",
            Self::Reaction => "reaction",
            Self::Template => "template",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for [`reply`].
///
/// `content` is the typed body matching `message_type`, for example a
/// [`Text`](crate::models::Text) when replying with text. The recipient
/// sees the new message with a contextual bubble showing the message
/// `message_id` points at.
#[derive(Debug, Clone)]
pub struct Reply<'a, T> {
    pub sender: Sender,
    pub recipient: String,
    /// ID of the message being replied to
    pub message_id: String,
    pub message_type: MessageType,
    pub content: &'a T,
}

/// Builds the spliced JSON payload for a reply.
///
/// The content is serialized once and embedded verbatim under the
/// message-type key, next to the `context` object carrying the replied-to
/// id. Returned as [`Payload::Bytes`] so the dispatcher sends it
/// unchanged.
///
/// # Errors
///
/// Returns [`RequestError::PayloadEncoding`] when the content cannot be
/// serialized.
pub fn build_reply_payload<T: Serialize>(reply: &Reply<'_, T>) -> Result<Payload, RequestError> {
    let content = serde_json::to_string(reply.content).map_err(RequestError::PayloadEncoding)?;

    let kind = reply.message_type.as_str();
    let body = format!(
        "{{\"messaging_product\":\"whatsapp\",\"context\":{{\"message_id\":\"{}\"}},\"to\":\"{}\",\"type\":\"{}\",\"{}\":{}}}",
        reply.message_id, reply.recipient, kind, kind, content
    );

    Ok(Payload::Bytes(body.into_bytes()))
}

/// Sends a reply to a previous message in a conversation.
///
/// # Errors
///
/// Any [`RequestError`] from [`build_reply_payload`] or the dispatch
/// pipeline.
pub async fn reply<C, T>(
    client: &C,
    req: &Reply<'_, T>,
) -> Result<MessageResponse, RequestError>
where
    C: HttpClient,
    T: Serialize,
{
    let payload = build_reply_payload(req)?;
    super::dispatch_payload(client, &req.sender, "reply", BTreeMap::new(), payload).await
}
