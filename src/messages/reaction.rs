//! Sending reaction messages.

use std::collections::BTreeMap;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::{self, Message, Reaction};

use super::{MessageResponse, Sender};

/// Parameters for [`react`].
#[derive(Debug, Clone)]
pub struct ReactRequest {
    pub sender: Sender,
    pub recipient: String,
    /// ID of the message being reacted to
    pub message_id: String,
    /// The reaction emoji; empty to remove a previous reaction
    pub emoji: String,
}

/// Sends a reaction to a previously received message.
///
/// Reactions to messages older than 30 days, deleted messages, or other
/// reaction messages are not delivered; the API reports that through
/// webhooks rather than this call's response.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn react<C: HttpClient>(
    client: &C,
    req: &ReactRequest,
) -> Result<MessageResponse, RequestError> {
    let message = Message {
        product: models::MESSAGING_PRODUCT.to_string(),
        to: req.recipient.clone(),
        kind: "reaction".to_string(),
        reaction: Some(Reaction {
            message_id: req.message_id.clone(),
            emoji: req.emoji.clone(),
        }),
        ..Message::default()
    };

    let payload = Payload::json(&message)?;
    super::dispatch_payload(client, &req.sender, "react", BTreeMap::new(), payload).await
}
