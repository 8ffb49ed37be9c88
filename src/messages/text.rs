//! Sending text messages.

use std::collections::BTreeMap;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::{self, Message, Text};

use super::{MessageResponse, Sender};

/// Parameters for [`send_text`].
#[derive(Debug, Clone)]
pub struct SendTextRequest {
    pub sender: Sender,
    /// Recipient phone number or account id
    pub recipient: String,
    /// The text body
    pub message: String,
    /// Render a preview for the first URL in the body, if any
    pub preview_url: bool,
}

/// Sends a text message to the recipient.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn send_text<C: HttpClient>(
    client: &C,
    req: &SendTextRequest,
) -> Result<MessageResponse, RequestError> {
    let message = Message {
        product: models::MESSAGING_PRODUCT.to_string(),
        recipient_type: models::RECIPIENT_TYPE_INDIVIDUAL.to_string(),
        to: req.recipient.clone(),
        kind: "text".to_string(),
        text: Some(Text {
            preview_url: req.preview_url,
            body: req.message.clone(),
        }),
        ..Message::default()
    };

    let payload = Payload::json(&message)?;
    super::dispatch_payload(client, &req.sender, "send text", BTreeMap::new(), payload).await
}
