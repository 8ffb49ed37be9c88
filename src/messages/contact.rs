//! Sending contact-card messages.

use std::collections::BTreeMap;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::{self, Contact, Message};

use super::{MessageResponse, Sender};

/// Parameters for [`send_contact`].
#[derive(Debug, Clone)]
pub struct SendContactRequest {
    pub sender: Sender,
    pub recipient: String,
    /// The contact cards to share
    pub contacts: Vec<Contact>,
}

/// Sends one or more contact cards to the recipient.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn send_contact<C: HttpClient>(
    client: &C,
    req: &SendContactRequest,
) -> Result<MessageResponse, RequestError> {
    let message = Message {
        product: models::MESSAGING_PRODUCT.to_string(),
        recipient_type: models::RECIPIENT_TYPE_INDIVIDUAL.to_string(),
        to: req.recipient.clone(),
        kind: "contact".to_string(),
        contacts: Some(req.contacts.clone()),
        ..Message::default()
    };

    let payload = Payload::json(&message)?;
    super::dispatch_payload(client, &req.sender, "send contact", BTreeMap::new(), payload).await
}
