//! Sending location messages.

use std::collections::BTreeMap;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::{self, Location, Message};

use super::{MessageResponse, Sender};

/// Parameters for [`send_location`].
#[derive(Debug, Clone)]
pub struct SendLocationRequest {
    pub sender: Sender,
    pub recipient: String,
    /// Display name of the location, e.g. a venue
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Sends a location message to the recipient.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn send_location<C: HttpClient>(
    client: &C,
    req: &SendLocationRequest,
) -> Result<MessageResponse, RequestError> {
    let message = Message {
        product: models::MESSAGING_PRODUCT.to_string(),
        recipient_type: models::RECIPIENT_TYPE_INDIVIDUAL.to_string(),
        to: req.recipient.clone(),
        kind: "location".to_string(),
        location: Some(Location {
            latitude: req.latitude,
            longitude: req.longitude,
            name: req.name.clone(),
            address: req.address.clone(),
        }),
        ..Message::default()
    };

    let payload = Payload::json(&message)?;
    super::dispatch_payload(client, &req.sender, "send location", BTreeMap::new(), payload).await
}
